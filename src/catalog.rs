//! Bundled snapshot of the standard license ID list.
//!
//! A static list of short identifiers from the published license list,
//! exposed as a membership predicate for the expression parser. Nothing here
//! touches the network or filesystem; resolution of an ID to full license
//! text or metadata is out of scope.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Version of the license list this snapshot was taken from.
pub const LICENSE_LIST_VERSION: &str = "1.19";

/// Standard license short identifiers, in license-list order.
static STANDARD_LICENSE_IDS: &[&str] = &[
    "AFL-1.1",
    "AFL-1.2",
    "AFL-2.0",
    "AFL-2.1",
    "AFL-3.0",
    "APL-1.0",
    "Aladdin",
    "ANTLR-PD",
    "Apache-1.0",
    "Apache-1.1",
    "Apache-2.0",
    "APSL-1.0",
    "APSL-1.1",
    "APSL-1.2",
    "APSL-2.0",
    "Artistic-1.0",
    "Artistic-1.0-cl8",
    "Artistic-1.0-Perl",
    "Artistic-2.0",
    "AAL",
    "BitTorrent-1.0",
    "BitTorrent-1.1",
    "BSL-1.0",
    "BSD-2-Clause",
    "BSD-2-Clause-FreeBSD",
    "BSD-2-Clause-NetBSD",
    "BSD-3-Clause",
    "BSD-3-Clause-Clear",
    "BSD-4-Clause",
    "BSD-4-Clause-UC",
    "CECILL-1.0",
    "CECILL-1.1",
    "CECILL-2.0",
    "CECILL-B",
    "CECILL-C",
    "ClArtistic",
    "CNRI-Python",
    "CNRI-Python-GPL-Compatible",
    "CPOL-1.02",
    "CDDL-1.0",
    "CDDL-1.1",
    "CPAL-1.0",
    "CPL-1.0",
    "CATOSL-1.1",
    "Condor-1.1",
    "CC-BY-1.0",
    "CC-BY-2.0",
    "CC-BY-2.5",
    "CC-BY-3.0",
    "CC-BY-ND-1.0",
    "CC-BY-ND-2.0",
    "CC-BY-ND-2.5",
    "CC-BY-ND-3.0",
    "CC-BY-NC-1.0",
    "CC-BY-NC-2.0",
    "CC-BY-NC-2.5",
    "CC-BY-NC-3.0",
    "CC-BY-NC-ND-1.0",
    "CC-BY-NC-ND-2.0",
    "CC-BY-NC-ND-2.5",
    "CC-BY-NC-ND-3.0",
    "CC-BY-NC-SA-1.0",
    "CC-BY-NC-SA-2.0",
    "CC-BY-NC-SA-2.5",
    "CC-BY-NC-SA-3.0",
    "CC-BY-SA-1.0",
    "CC-BY-SA-2.0",
    "CC-BY-SA-2.5",
    "CC-BY-SA-3.0",
    "CC0-1.0",
    "CUA-OPL-1.0",
    "D-FSL-1.0",
    "WTFPL",
    "EPL-1.0",
    "eCos-2.0",
    "ECL-1.0",
    "ECL-2.0",
    "EFL-1.0",
    "EFL-2.0",
    "Entessa",
    "ErlPL-1.1",
    "EUDatagrid",
    "EUPL-1.0",
    "EUPL-1.1",
    "Fair",
    "Frameworx-1.0",
    "FTL",
    "AGPL-1.0",
    "AGPL-3.0",
    "GFDL-1.1",
    "GFDL-1.2",
    "GFDL-1.3",
    "GPL-1.0",
    "GPL-1.0+",
    "GPL-2.0",
    "GPL-2.0+",
    "GPL-2.0-with-autoconf-exception",
    "GPL-2.0-with-bison-exception",
    "GPL-2.0-with-classpath-exception",
    "GPL-2.0-with-font-exception",
    "GPL-2.0-with-GCC-exception",
    "GPL-3.0",
    "GPL-3.0+",
    "GPL-3.0-with-autoconf-exception",
    "GPL-3.0-with-GCC-exception",
    "LGPL-2.1",
    "LGPL-2.1+",
    "LGPL-3.0",
    "LGPL-3.0+",
    "LGPL-2.0",
    "LGPL-2.0+",
    "gSOAP-1.3b",
    "HPND",
    "IBM-pibs",
    "IPL-1.0",
    "Imlib2",
    "IJG",
    "Intel",
    "IPA",
    "ISC",
    "JSON",
    "LPPL-1.3a",
    "LPPL-1.0",
    "LPPL-1.1",
    "LPPL-1.2",
    "LPPL-1.3c",
    "Libpng",
    "LPL-1.02",
    "LPL-1.0",
    "MS-PL",
    "MS-RL",
    "MirOS",
    "MIT",
    "Motosoto",
    "MPL-1.0",
    "MPL-1.1",
    "MPL-2.0",
    "MPL-2.0-no-copyleft-exception",
    "Multics",
    "NASA-1.3",
    "Naumen",
    "NBPL-1.0",
    "NGPL",
    "NOSL",
    "NPL-1.0",
    "NPL-1.1",
    "Nokia",
    "NPOSL-3.0",
    "NTP",
    "OCLC-2.0",
    "ODbL-1.0",
    "PDDL-1.0",
    "OGTSL",
    "OLDAP-2.2.2",
    "OLDAP-1.1",
    "OLDAP-1.2",
    "OLDAP-1.3",
    "OLDAP-1.4",
    "OLDAP-2.0",
    "OLDAP-2.0.1",
    "OLDAP-2.1",
    "OLDAP-2.2",
    "OLDAP-2.2.1",
    "OLDAP-2.3",
    "OLDAP-2.4",
    "OLDAP-2.5",
    "OLDAP-2.6",
    "OLDAP-2.7",
    "OPL-1.0",
    "OSL-1.0",
    "OSL-2.0",
    "OSL-2.1",
    "OSL-3.0",
    "OLDAP-2.8",
    "OpenSSL",
    "PHP-3.0",
    "PHP-3.01",
    "PostgreSQL",
    "Python-2.0",
    "QPL-1.0",
    "RPSL-1.0",
    "RPL-1.1",
    "RPL-1.5",
    "RHeCos-1.1",
    "RSCPL",
    "Ruby",
    "SAX-PD",
    "SGI-B-1.0",
    "SGI-B-1.1",
    "SGI-B-2.0",
    "OFL-1.0",
    "OFL-1.1",
    "SimPL-2.0",
    "Sleepycat",
    "SMLNJ",
    "SugarCRM-1.1.3",
    "SISSL",
    "SISSL-1.2",
    "SPL-1.0",
    "Watcom-1.0",
    "NCSA",
    "VSL-1.0",
    "W3C",
    "WXwindows",
    "Xnet",
    "X11",
    "XFree86-1.1",
    "YPL-1.0",
    "YPL-1.1",
    "Zimbra-1.3",
    "Zlib",
    "ZPL-1.1",
    "ZPL-2.0",
    "ZPL-2.1",
    "Unlicense",
];

/// Membership set built from the ID list on first use.
static STANDARD_LICENSE_ID_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STANDARD_LICENSE_IDS.iter().copied().collect());

/// Whether `id` is a standard license short identifier.
///
/// Matching is exact and case-sensitive: `"MIT"` is standard, `"mit"` is not.
pub fn is_standard_license_id(id: &str) -> bool {
    STANDARD_LICENSE_ID_SET.contains(id)
}

/// All standard license short identifiers in this snapshot.
pub fn standard_license_ids() -> &'static [&'static str] {
    STANDARD_LICENSE_IDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_ids_are_members() {
        assert!(is_standard_license_id("MIT"));
        assert!(is_standard_license_id("Apache-2.0"));
        assert!(is_standard_license_id("GPL-2.0+"));
        assert!(is_standard_license_id("BSD-3-Clause"));
        assert!(is_standard_license_id("Unlicense"));
    }

    #[test]
    fn test_unknown_id_is_not_member() {
        assert!(!is_standard_license_id("NotARealLicense-9.9"));
        assert!(!is_standard_license_id(""));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!is_standard_license_id("mit"));
        assert!(!is_standard_license_id("apache-2.0"));
    }

    #[test]
    fn test_sentinels_are_not_license_ids() {
        assert!(!is_standard_license_id("NONE"));
        assert!(!is_standard_license_id("NOASSERTION"));
    }

    #[test]
    fn test_list_and_set_agree() {
        assert_eq!(standard_license_ids().len(), STANDARD_LICENSE_ID_SET.len());
        for id in standard_license_ids() {
            assert!(is_standard_license_id(id), "missing: {id}");
        }
    }

    #[test]
    fn test_ids_have_no_surrounding_whitespace() {
        for id in standard_license_ids() {
            assert_eq!(*id, id.trim(), "untrimmed id: {id:?}");
        }
    }
}
