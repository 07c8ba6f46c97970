// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Smallest known delayed palindromes, by iteration count.
//!
//! For each iteration count k, the table holds the smallest number known to
//! reach a palindrome in exactly k reverse-and-add steps. Entries from 23
//! digits up mostly come from partial searches: they are the smallest found,
//! not proven smallest, and are flagged as such.
//!
//! The table is keyed by iteration count. It is built once and never changes.

use crate::digits::DigitSequence;
use serde::Serialize;
use std::collections::BTreeMap;

/// Known record data.
/// Format: (iteration_count, number, is_proven_smallest)
pub const KNOWN_RECORDS: &[(usize, &str, bool)] = &[
    // 1 digit
    (1, "1", true),
    (2, "5", true),

    // 2 digits
    (3, "59", true),
    (4, "69", true),
    (6, "79", true),
    (24, "89", true),

    // 3 digits
    (5, "166", true),
    (7, "188", true),
    (8, "193", true),
    (10, "829", true),
    (11, "167", true),
    (14, "849", true),
    (15, "177", true),
    (16, "999", true),
    (17, "739", true),
    (19, "989", true),
    (22, "869", true),
    (23, "187", true),

    // 4 digits
    (9, "1397", true),
    (12, "2069", true),
    (13, "1797", true),
    (18, "1798", true),
    (20, "6999", true),
    (21, "1297", true),

    // 5 digits
    (25, "10797", true),
    (26, "10853", true),
    (27, "10921", true),
    (28, "10971", true),
    (29, "13297", true),
    (30, "10548", true),
    (31, "13293", true),
    (32, "17793", true),
    (33, "20889", true),
    (37, "80359", true),
    (38, "13697", true),
    (39, "10794", true),
    (40, "15891", true),
    (47, "70759", true),
    (52, "70269", true),
    (53, "10677", true),
    (54, "10833", true),
    (55, "10911", true),

    // 6 digits
    (34, "700269", true),
    (35, "106977", true),
    (36, "108933", true),
    (45, "600259", true),
    (46, "131996", true),
    (50, "600279", true),
    (51, "141996", true),
    (57, "600579", true),
    (58, "147996", true),
    (59, "178992", true),
    (60, "190890", true),
    (63, "600589", true),
    (64, "150296", true),

    // 7 digits
    (41, "1009227", true),
    (42, "1007619", true),
    (43, "1009246", true),
    (44, "1008628", true),
    (48, "1007377", true),
    (49, "1001699", true),
    (56, "1009150", true),
    (61, "1058921", true),
    (62, "1050995", true),
    (65, "1003569", true),
    (66, "1036974", true),
    (67, "1490991", true),
    (68, "3009179", true),
    (69, "1008595", true),
    (70, "1064912", true),
    (75, "1998999", true),
    (77, "7008429", true),
    (78, "1000689", true),
    (79, "1005744", true),
    (80, "1007601", true),
    (82, "7008899", true),
    (96, "9008299", true),

    // 8 digits
    (71, "10905963", true),
    (72, "10069785", true),
    (73, "10089342", true),
    (74, "11979990", true),
    (76, "10029372", true),
    (81, "10029826", true),
    (83, "16207990", true),
    (94, "90000589", true),
    (95, "10309988", true),

    // 9 digits
    (84, "100389898", true),
    (85, "100055896", true),
    (86, "110909992", true),
    (87, "160009490", true),
    (88, "800067199", true),
    (89, "151033997", true),
    (90, "100093573", true),
    (91, "103249931", true),
    (92, "107025910", true),
    (93, "180005498", true),
    (97, "100239862", true),
    (98, "140669390", true),

    // 10 digits
    (99, "1090001921", true),
    (100, "7007009909", true),
    (101, "1009049407", true),
    (103, "9000046899", true),
    (104, "1050027948", true),
    (105, "1304199693", true),
    (108, "5020089949", true),
    (109, "1005499526", true),

    // 11 digits
    (102, "10000505448", true),
    (106, "10000922347", true),
    (107, "10000696511", true),
    (110, "10701592943", true),
    (111, "10018999583", true),
    (112, "10000442119", true),
    (113, "10000761554", true),
    (114, "10084899970", true),
    (115, "10006198250", true),
    (116, "18060009890", true),
    (117, "11400245996", true),
    (118, "16002897892", true),
    (119, "18317699990", true),
    (122, "37000488999", true),
    (123, "10050289485", true),
    (130, "90000626389", true),
    (131, "10000853648", true),
    (132, "13003696093", true),
    (133, "10050859271", true),
    (134, "10287799930", true),
    (135, "10000973037", true),
    (136, "10600713933", true),
    (137, "10942399911", true),
    (144, "60000180709", true),
    (145, "11009599796", true),
    (146, "16000097392", true),
    (147, "10031199494", true),
    (148, "10306095991", true),
    (149, "10087799570", true),

    // 12 digits
    (120, "100900509906", true),
    (121, "100000055859", true),
    (124, "104000146950", true),
    (129, "180005998298", true),
    (142, "300000185539", true),
    (143, "100001987765", true),

    // 13 digits
    (125, "1000007614641", true),
    (126, "1000043902320", true),
    (127, "1000006653746", true),
    (128, "1000005469548", true),
    (139, "4000096953659", true),
    (140, "1332003929995", true),
    (141, "1000201995662", true),
    (183, "6000008476379", true),
    (184, "1200004031698", true),
    (185, "1631002019993", true),
    (186, "1000006412206", true),
    (187, "1090604591930", true),
    (188, "1600005969190", true),

    // 14 digits
    (138, "10090899969901", true),
    (181, "40000004480279", true),
    (182, "14104229999995", true),

    // 15 digits
    (150, "100000109584608", true),
    (151, "100000098743648", true),
    (152, "100004789906151", true),
    (153, "100079239995161", true),
    (154, "100389619999030", true),
    (155, "200000729975309", true),
    (156, "107045067996994", true),
    (157, "105420999199982", true),
    (158, "101000269830970", true),
    (159, "104000047066970", true),
    (163, "700000001839569", true),
    (164, "100000050469737", true),
    (165, "101000789812993", true),
    (166, "100907098999571", true),
    (167, "100017449991820", true),
    (169, "890000023937399", true),
    (170, "100009989989199", true),
    (171, "101507024989944", true),
    (172, "107405139999943", true),
    (173, "100057569996821", true),
    (174, "103500369729970", true),
    (178, "900000076152049", true),
    (179, "100000439071028", true),
    (180, "120000046510993", true),
    (189, "103000015331997", true),
    (190, "100617081999573", true),
    (191, "100009029910821", true),
    (192, "107000020928910", true),
    (198, "100000090745299", true),
    (199, "102000149322944", true),
    (200, "130000074931591", true),
    (201, "100120849299260", true),

    // 16 digits
    (161, "6000000039361479", true),
    (162, "1421000069679996", true),
    (168, "1000650998992311", true),
    (175, "1000002899436401", true),
    (176, "1000100396492200", true),
    (177, "1400000027672498", true),
    (193, "7090000039309919", true),
    (194, "1000050048994957", true),
    (195, "1003000024749923", true),
    (196, "1000803019495711", true),
    (197, "1030020097997900", true),

    // 17 digits
    (160, "10000000730931027", true),
    (206, "20005000862599819", true),
    (207, "11450360479969994", true),
    (208, "10009000275899569", true),
    (209, "10059430139999234", true),
    (210, "12179702595999991", true),
    (229, "79000000445783599", true),
    (230, "10000000767846797", true),
    (231, "10000000673402336", true),
    (232, "10000000525586206", true),
    (233, "10005000760994249", true),
    (234, "10030503899969524", true),
    (235, "12000009694736291", true),
    (236, "10442000392399960", true),

    // 18 digits
    (202, "195030047999791993", true),
    (203, "100000078999111766", true),
    (204, "100710000333399973", true),
    (205, "100000002973751552", true),
    (211, "100000277999334202", true),
    (212, "110300361999869090", true),
    (213, "300000000128545799", true),
    (214, "104300000514769945", true),
    (215, "100700000509609622", true),
    (216, "120906490499909290", true),
    (218, "900040000881499569", true),
    (219, "100072100489999238", true),
    (220, "121506542999979993", true),
    (221, "106096507979997951", true),
    (222, "100980800839699830", true),
    (227, "600000000606339049", true),
    (228, "170500000303619996", true),

    // 19 digits
    (217, "1000000038990407538", true),
    (224, "9000000000255353839", true),
    (225, "1000000005577676468", true),
    (226, "1060000000523124995", true),
    (258, "3000000022999288679", true),
    (259, "1000000079994144385", true),
    (260, "1003062289999939142", true),
    (261, "1186060307891929990", true),

    // 20 digits
    (223, "10000000039513841287", true),
    (253, "70000000000507277299", true),
    (254, "10200000000708183947", true),
    (255, "10022000904998799523", true),
    (256, "10000000039395795416", true),
    (257, "10200000000065287900", true),

    // 21 digits
    (251, "500000060001199990549", true),
    (252, "100000081000999940726", true),

    // 22 digits
    (238, "3000800040089968999539", true),
    (239, "1000950870044993999265", true),
    (240, "1000000040796912297132", true),
    (249, "1990000200024599902999", true),
    (250, "1000000630016999401994", true),

    // 23 digits
    (237, "10010020600686999559662", false),
    (241, "10108000002095990099950", false),
    (242, "10060300040069783909870", false),
    (243, "10807308105195993997970", false),
    (245, "30000000000837077247379", false),
    (246, "10000000000500075338778", true),
    (247, "10000000380589999534342", true),
    (248, "10385810003399979999951", false),
    (262, "15007060502692999894096", false),
    (286, "10000006000090499474959", true),
    (287, "10000008700094994282974", true),
    (288, "12000700000025339936491", false),
    (289, "10036069400174999499950", false),

    // 24 digits
    (244, "111120050000380599699992", false),
    (267, "700000000000668930560769", false),
    (268, "100000000008974960730837", false),
    (269, "102516500000669459999913", false),
    (270, "106758031110599996999901", false),
    (271, "100100020010790098449800", false),
    (282, "100000000069999589985049", false),
    (283, "100000000089999249947024", false),
    (284, "140000030099999099448991", false),
    (285, "100500000199999537709960", false),

    // 25 digits
    (263, "1010000000019912549260950", false),
    (265, "6000000000003126663605379", false),
    (266, "1420000000004713336302996", false),
    (272, "1000000049003739995755649", false),
    (273, "1000000079641999992877324", false),
    (274, "1040200620332990995192950", false),
    (275, "1011050517536999997929950", false),
    (276, "1000000000008771050441908", false),
    (277, "1100000000004165700220993", false),
    (278, "1000000000008037782836719", false),
    (279, "1000000000009468449423854", false),
    (280, "1000004285088999999687280", false),
    (281, "1000000000007468472243350", false),
    (290, "1000000009001899177117039", false),
    (291, "1000000000008799678139630", false),
    (292, "1000000000005083294994790", false),
    (293, "1000206827388999999095750", false),

    // 26 digits
    (264, "10000013142009999999998117", false),
];

/// One row of the record table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordEntry {
    pub iteration_count: usize,
    pub number: DigitSequence,
    /// True if no smaller number can reach a palindrome in this many steps.
    pub is_proven_smallest: bool,
}

/// Immutable map from iteration count to the smallest known number.
///
/// # Example
///
/// ```
/// use lychrel_check::memo::RecordTable;
///
/// let table = RecordTable::known();
/// assert_eq!(table.get(24).unwrap().number.to_string(), "89");
/// assert_eq!(table.highest_iteration_count(), Some(293));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    entries: BTreeMap<usize, RecordEntry>,
}

impl RecordTable {
    /// The built-in table of known records.
    pub fn known() -> Self {
        Self::from_entries(KNOWN_RECORDS.iter().map(|&(iteration_count, number, proven)| {
            RecordEntry {
                iteration_count,
                number: static_digits(number),
                is_proven_smallest: proven,
            }
        }))
    }

    /// Build a table from arbitrary entries. A later entry for the same
    /// iteration count replaces an earlier one.
    pub fn from_entries(entries: impl IntoIterator<Item = RecordEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.iteration_count, entry))
                .collect(),
        }
    }

    pub fn get(&self, iteration_count: usize) -> Option<&RecordEntry> {
        self.entries.get(&iteration_count)
    }

    /// The largest iteration count with a known entry.
    pub fn highest_iteration_count(&self) -> Option<usize> {
        self.entries.keys().next_back().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending iteration count.
    pub fn iter(&self) -> impl Iterator<Item = &RecordEntry> {
        self.entries.values()
    }

    /// Entries whose iteration count lies in `range`.
    pub fn range(
        &self,
        range: impl std::ops::RangeBounds<usize>,
    ) -> impl Iterator<Item = &RecordEntry> {
        self.entries.range(range).map(|(_, entry)| entry)
    }
}

/// Digits of a literal from [`KNOWN_RECORDS`], which holds only canonical
/// decimal strings.
fn static_digits(text: &'static str) -> DigitSequence {
    let digits: Vec<u8> = text.bytes().map(|b| b - b'0').collect();
    DigitSequence::from_canonical(digits)
}
