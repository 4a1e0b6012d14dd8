use anyhow::bail;
use log::warn;

pub const DEFAULT_PORT: u16 = 8080;

/// Picks the listening port from `--port`/`-p`, a lone positional argument,
/// or the `PORT` variable, in that order. Invalid input is reported and
/// replaced by `default`; the next source is never consulted once a
/// candidate was found.
pub fn resolve_port<S, F>(args: &[S], env: F, default: u16) -> u16
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

    let flagged = args
        .windows(2)
        .find(|pair| pair[0] == "--port" || pair[0] == "-p")
        .map(|pair| pair[1]);

    if let Some(raw) = flagged {
        return or_default(parse_port(raw, "port argument", "port number"), default);
    }

    if let [raw] = args.as_slice() {
        if !raw.starts_with('-') {
            return or_default(parse_port(raw, "port argument", "port number"), default);
        }
    }

    match env("PORT") {
        Some(raw) if !raw.is_empty() => or_default(
            parse_port(&raw, "PORT environment variable", "PORT environment variable"),
            default,
        ),
        _ => default,
    }
}

fn or_default(parsed: anyhow::Result<u16>, default: u16) -> u16 {
    parsed.unwrap_or_else(|e| {
        warn!("{}", fallback_warning(&e, default));
        default
    })
}

fn fallback_warning(err: &anyhow::Error, default: u16) -> String {
    format!("{}. Using default port {}", err, default)
}

fn parse_port(raw: &str, unparsable: &str, out_of_range: &str) -> anyhow::Result<u16> {
    let Ok(n) = raw.parse::<i32>() else {
        bail!("Invalid {} '{}'", unparsable, raw);
    };
    match u16::try_from(n) {
        Ok(port) if port != 0 => Ok(port),
        _ => bail!("Invalid {} {}", out_of_range, n),
    }
}
