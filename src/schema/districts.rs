//! Static master list of the 14 Kerala districts

use super::District;

/// The official district master list. Insertion order is seeding order.
pub static DISTRICTS: [District; 14] = [
    District {
        district_objid: 1,
        district_code: "01",
        district_name: "KASARGOD",
    },
    District {
        district_objid: 2,
        district_code: "02",
        district_name: "KANNUR",
    },
    District {
        district_objid: 3,
        district_code: "03",
        district_name: "WAYANAD",
    },
    District {
        district_objid: 4,
        district_code: "04",
        district_name: "KOZHIKODE",
    },
    District {
        district_objid: 5,
        district_code: "05",
        district_name: "MALAPPURAM",
    },
    District {
        district_objid: 6,
        district_code: "06",
        district_name: "PALAKKAD",
    },
    District {
        district_objid: 7,
        district_code: "07",
        district_name: "THRISSUR",
    },
    District {
        district_objid: 8,
        district_code: "08",
        district_name: "ERNAKULAM",
    },
    District {
        district_objid: 9,
        district_code: "09",
        district_name: "IDUKKI",
    },
    District {
        district_objid: 10,
        district_code: "10",
        district_name: "KOTTAYAM",
    },
    District {
        district_objid: 11,
        district_code: "11",
        district_name: "ALAPPUZHA",
    },
    District {
        district_objid: 12,
        district_code: "12",
        district_name: "PATHANAMTHITTA",
    },
    District {
        district_objid: 13,
        district_code: "13",
        district_name: "KOLLAM",
    },
    District {
        district_objid: 14,
        district_code: "14",
        district_name: "THIRUVANANTHAPURAM",
    },
];

/// Look up a district by its two-digit code
pub fn district_by_code(code: &str) -> Option<&'static District> {
    DISTRICTS.iter().find(|d| d.district_code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fourteen_districts() {
        assert_eq!(DISTRICTS.len(), 14);
    }

    #[test]
    fn test_codes_and_ids_unique() {
        let codes: HashSet<_> = DISTRICTS.iter().map(|d| d.district_code).collect();
        let ids: HashSet<_> = DISTRICTS.iter().map(|d| d.district_objid).collect();
        assert_eq!(codes.len(), 14);
        assert_eq!(ids.len(), 14);
    }

    #[test]
    fn test_codes_zero_padded_and_match_objid() {
        for d in &DISTRICTS {
            assert_eq!(d.district_code.len(), 2);
            assert_eq!(d.district_code, format!("{:02}", d.district_objid));
        }
    }

    #[test]
    fn test_district_by_code() {
        let d = district_by_code("08").unwrap();
        assert_eq!(d.district_name, "ERNAKULAM");
        assert!(district_by_code("8").is_none());
        assert!(district_by_code("15").is_none());
    }
}
