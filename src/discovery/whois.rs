//! WHOIS lookup, used as a fallback strategy
//!
//! Speaks the raw WHOIS protocol: a TCP connection to port 43, the query
//! followed by CRLF, then the response until EOF. The IANA root server is
//! asked first and a single `refer:` hop is followed to the registry
//! operator. Registration records often carry registrant and abuse
//! contact addresses that the site itself does not expose.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// The WHOIS root server queried first
const IANA_WHOIS: &str = "whois.iana.org";

/// WHOIS service port
const WHOIS_PORT: u16 = 43;

/// Resolves the registration record for a host, best-effort
///
/// The query uses the registrable tail of the host (its last two labels)
/// since registries keep records per registered domain, not per
/// subdomain. Every failure mode returns `None`; the caller treats that
/// as an empty contribution.
///
/// # Arguments
///
/// * `host` - The website's host
/// * `timeout` - Per-connection timeout
///
/// # Returns
///
/// The serialized record text, or `None` if the lookup failed
pub async fn whois_lookup(host: &str, timeout: Duration) -> Option<String> {
    let domain = registrable_domain(host);

    let root_response = match query_server(IANA_WHOIS, &domain, timeout).await {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("WHOIS root query failed for {}: {}", domain, e);
            return None;
        }
    };

    // Follow a single referral to the registry operator
    if let Some(referral) = find_referral(&root_response) {
        match query_server(&referral, &domain, timeout).await {
            Ok(text) => {
                let mut combined = root_response;
                combined.push('\n');
                combined.push_str(&text);
                return Some(combined);
            }
            Err(e) => {
                tracing::debug!("WHOIS referral {} failed for {}: {}", referral, domain, e);
            }
        }
    }

    Some(root_response)
}

/// Sends one WHOIS query and reads the response to EOF
async fn query_server(
    server: &str,
    query: &str,
    timeout: Duration,
) -> std::io::Result<String> {
    let exchange = async {
        let mut stream = TcpStream::connect((server, WHOIS_PORT)).await?;
        stream.write_all(query.as_bytes()).await?;
        stream.write_all(b"\r\n").await?;

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await?;
        Ok(String::from_utf8_lossy(&response).into_owned())
    };

    tokio::time::timeout(timeout, exchange)
        .await
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::TimedOut, "WHOIS timeout"))?
}

/// Extracts the referral server from a WHOIS response, if present
fn find_referral(response: &str) -> Option<String> {
    response.lines().find_map(|line| {
        let lower = line.to_lowercase();
        let rest = lower
            .strip_prefix("refer:")
            .or_else(|| lower.strip_prefix("whois:"))?;
        let server = rest.trim();
        if server.is_empty() {
            None
        } else {
            Some(server.to_string())
        }
    })
}

/// Approximates the registrable domain as the host's last two labels
fn registrable_domain(host: &str) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        host.to_string()
    } else {
        labels[labels.len() - 2..].join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_domain() {
        assert_eq!(registrable_domain("example.com"), "example.com");
        assert_eq!(registrable_domain("www.example.com"), "example.com");
        assert_eq!(registrable_domain("a.b.example.co"), "example.co");
        assert_eq!(registrable_domain("localhost"), "localhost");
    }

    #[test]
    fn test_find_referral() {
        let response = "% IANA WHOIS server\nrefer:        whois.verisign-grs.com\ndomain: COM\n";
        assert_eq!(
            find_referral(response),
            Some("whois.verisign-grs.com".to_string())
        );
    }

    #[test]
    fn test_find_referral_whois_key() {
        let response = "whois: whois.nic.io\nstatus: ACTIVE\n";
        assert_eq!(find_referral(response), Some("whois.nic.io".to_string()));
    }

    #[test]
    fn test_find_referral_absent() {
        assert_eq!(find_referral("domain: EXAMPLE.COM\n"), None);
        assert_eq!(find_referral("refer:   \n"), None);
    }

    #[tokio::test]
    async fn test_query_unresolvable_server_fails() {
        // .invalid never resolves, and the short timeout keeps this fast
        let result = query_server("whois.nosite.invalid", "example.com", Duration::from_millis(200)).await;
        assert!(result.is_err());
    }
}
