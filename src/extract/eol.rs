use chrono::NaiveDate;

/// Support milestones for one product family, matched by substring against
/// the detected OS description.
pub struct EolEntry {
    pub product: &'static str,
    pub mainstream_end: (i32, u32, u32),
    pub extended_end: (i32, u32, u32),
    pub esu_end: Option<(i32, u32, u32)>,
}

/// Vendor end-of-support dates, in the order rows should appear when one OS
/// description matches several products.
///
/// Dates from https://docs.microsoft.com/en-gb/lifecycle/products/ and
/// https://endoflife.date/
pub const ENTRIES: [EolEntry; 11] = [
    EolEntry {
        product: "Microsoft Windows 2000",
        mainstream_end: (2005, 6, 30),
        extended_end: (2010, 7, 13),
        esu_end: None,
    },
    EolEntry {
        product: "Microsoft Windows Server 2003",
        mainstream_end: (2010, 7, 13),
        extended_end: (2015, 7, 14),
        esu_end: None,
    },
    EolEntry {
        product: "Microsoft Windows Server 2008",
        mainstream_end: (2015, 1, 13),
        extended_end: (2020, 1, 14),
        esu_end: Some((2023, 1, 10)),
    },
    EolEntry {
        product: "Microsoft Windows XP",
        mainstream_end: (2009, 4, 14),
        extended_end: (2014, 4, 8),
        esu_end: None,
    },
    EolEntry {
        product: "Microsoft Windows Vista",
        mainstream_end: (2012, 4, 10),
        extended_end: (2017, 4, 11),
        esu_end: None,
    },
    EolEntry {
        product: "Microsoft Windows 7",
        mainstream_end: (2015, 1, 13),
        extended_end: (2020, 1, 14),
        esu_end: Some((2023, 1, 10)),
    },
    EolEntry {
        product: "VMware ESXi 5.5",
        mainstream_end: (2015, 9, 19),
        extended_end: (2020, 9, 19),
        esu_end: None,
    },
    EolEntry {
        product: "VMware ESXi 6.0",
        mainstream_end: (2018, 3, 12),
        extended_end: (2022, 3, 12),
        esu_end: None,
    },
    EolEntry {
        product: "Ubuntu 14.04",
        mainstream_end: (2016, 9, 30),
        extended_end: (2019, 4, 2),
        esu_end: None,
    },
    EolEntry {
        product: "Ubuntu 16.04",
        mainstream_end: (2018, 10, 1),
        extended_end: (2021, 4, 2),
        esu_end: None,
    },
    EolEntry {
        product: "CentOS Linux 6",
        mainstream_end: (2017, 5, 10),
        extended_end: (2020, 11, 30),
        esu_end: None,
    },
];

/// Render a milestone as e.g. "08 April 2014". Day is zero padded to match
/// vendor lifecycle pages.
pub fn support_date(date: (i32, u32, u32)) -> String {
    let (year, month, day) = date;
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.format("%d %B %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_date_pads_single_digit_days() {
        assert_eq!(support_date((2014, 4, 8)), "08 April 2014");
        assert_eq!(support_date((2021, 4, 2)), "02 April 2021");
    }

    #[test]
    fn test_support_date_renders_full_month_names() {
        assert_eq!(support_date((2005, 6, 30)), "30 June 2005");
        assert_eq!(support_date((2018, 10, 1)), "01 October 2018");
        assert_eq!(support_date((2020, 11, 30)), "30 November 2020");
    }

    #[test]
    fn test_entries_with_extended_security_updates() {
        let with_esu: Vec<&str> = ENTRIES
            .iter()
            .filter(|e| e.esu_end.is_some())
            .map(|e| e.product)
            .collect();

        assert_eq!(
            with_esu,
            vec!["Microsoft Windows Server 2008", "Microsoft Windows 7"]
        );
        assert_eq!(support_date((2023, 1, 10)), "10 January 2023");
    }

    #[test]
    fn test_every_entry_renders_valid_dates() {
        for entry in &ENTRIES {
            assert!(!support_date(entry.mainstream_end).is_empty(), "{}", entry.product);
            assert!(!support_date(entry.extended_end).is_empty(), "{}", entry.product);
        }
    }
}
