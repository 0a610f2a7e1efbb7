use std::fmt;
use std::str::FromStr;

/// One `ISD-AS-IFID` half of a link identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceAddr {
    pub isd: u16,
    pub asn: u32,
    pub ifid: u32,
}

impl FromStr for InterfaceAddr {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = raw.trim().split('-').collect();
        let [isd, asn, ifid] = fields.as_slice() else {
            return Err(format!("expected ISD-AS-IFID, got {raw:?}"));
        };
        Ok(Self {
            isd: isd
                .parse()
                .map_err(|_| format!("invalid ISD {isd:?} in {raw:?}"))?,
            asn: asn
                .parse()
                .map_err(|_| format!("invalid AS {asn:?} in {raw:?}"))?,
            ifid: ifid
                .parse()
                .map_err(|_| format!("invalid interface id {ifid:?} in {raw:?}"))?,
        })
    }
}

impl fmt::Display for InterfaceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.isd, self.asn, self.ifid)
    }
}

/// Both ends of a link as written in its `ISD-AS-IFID,ISD-AS-IFID` identifier.
///
/// The raw text of the second half is kept for `InterfaceMatch::Substring`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEndpoints {
    pub first: InterfaceAddr,
    pub second: InterfaceAddr,
    second_raw: String,
}

impl LinkEndpoints {
    pub fn second_raw(&self) -> &str {
        &self.second_raw
    }

    pub fn involves(&self, asn: u32) -> bool {
        self.first.asn == asn || self.second.asn == asn
    }
}

impl FromStr for LinkEndpoints {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let Some((first_raw, second_raw)) = raw.split_once(',') else {
            return Err(format!("expected two comma separated endpoints, got {raw:?}"));
        };
        if second_raw.contains(',') {
            return Err(format!("more than two endpoints in {raw:?}"));
        }
        Ok(Self {
            first: first_raw.parse()?,
            second: second_raw.parse()?,
            second_raw: second_raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_halves() {
        let ends: LinkEndpoints = "1-47377-3,2-12392-14".parse().expect("valid id");
        assert_eq!(
            ends.first,
            InterfaceAddr {
                isd: 1,
                asn: 47377,
                ifid: 3
            }
        );
        assert_eq!(ends.second.asn, 12392);
        assert_eq!(ends.second.ifid, 14);
        assert_eq!(ends.second_raw(), "2-12392-14");
        assert!(ends.involves(47377));
        assert!(!ends.involves(4737));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!("1-2-3".parse::<LinkEndpoints>().is_err());
        assert!("1-2,1-3-4".parse::<LinkEndpoints>().is_err());
        assert!("1-2-3,1-3-x".parse::<LinkEndpoints>().is_err());
        assert!("1-2-3,1-3-4,1-4-5".parse::<LinkEndpoints>().is_err());
    }

    #[test]
    fn display_round_trips_text() {
        let addr: InterfaceAddr = "1-2-3".parse().expect("valid addr");
        assert_eq!(addr.to_string(), "1-2-3");
    }
}
