//! Common validation utilities.

use std::net::IpAddr;

use validator::ValidationError;

/// Validates a MAC-48 address written as six hex octets separated by `:` or `-`.
/// Surrounding whitespace is ignored.
pub fn validate_mac_address(mac: &str) -> Result<(), ValidationError> {
    let mac = mac.trim();
    let separator = if mac.contains(':') { ':' } else { '-' };
    let octets: Vec<&str> = mac.split(separator).collect();

    let well_formed = octets.len() == 6
        && octets
            .iter()
            .all(|o| o.len() == 2 && o.chars().all(|c| c.is_ascii_hexdigit()));

    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("mac_address");
        err.message = Some("MAC address must look like aa:bb:cc:dd:ee:ff".into());
        Err(err)
    }
}

/// Validates an IPv4 or IPv6 address, ignoring surrounding whitespace.
pub fn validate_ip_address(ip: &str) -> Result<(), ValidationError> {
    match ip.trim().parse::<IpAddr>() {
        Ok(_) => Ok(()),
        Err(_) => {
            let mut err = ValidationError::new("ip_address");
            err.message = Some("IP address must be a valid IPv4 or IPv6 address".into());
            Err(err)
        }
    }
}

/// Rejects values made only of whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}
