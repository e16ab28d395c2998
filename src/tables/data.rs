// Generated by tools/gen_tables.py. Do not edit by hand.
//
// Lunation instants from the series in Meeus, Astronomical
// Algorithms ch. 49; solar longitudes from truncated VSOP87D
// with nutation and aberration; Espenak/Meeus delta-T. All
// instants reduced to UTC+8 civil dates before encoding.

pub(super) const TABLE_FIRST_YEAR: i32 = 1800;
pub(super) const TABLE_LAST_YEAR: i32 = 2300;

/// Bits 0..13: lunation i spans 30 days (starting at the
/// first new moon of the year). Bits 13..18: day of year of
/// the first new moon. Bits 18..22: leap month of the
/// Chinese year beginning in this Gregorian year (0 = none).
pub(super) const YEAR_RECORDS: [u32; 501] = [
    0x132aad, 0x01f5ac, 0x008ba9, 0x0aeda9, 0x01bd52, 0x183d15,
    0x028d16, 0x013a4e, 0x178956, 0x0212b6, 0x00b5b5, 0x0f36d4,
    0x01cea9, 0x006e8a, 0x0ab68b, 0x015527, 0x1bb52b, 0x02295b,
    0x00f2da, 0x134b6a, 0x021754, 0x009749, 0x0efb45, 0x019a8b,
    0x1c352b, 0x02752b, 0x010a5b, 0x176aad, 0x02356a, 0x00bb55,
    0x133da4, 0x01dd45, 0x247a95, 0x02ba95, 0x01552d, 0x1bb536,
    0x024ab5, 0x00f5aa, 0x1356ca, 0x01eea5, 0x00bd4a, 0x0eed4a,
    0x018a96, 0x1c352e, 0x029556, 0x010ab5, 0x176b55, 0x023752,
    0x00cea5, 0x131aa5, 0x01b64b, 0x205497, 0x02b29b, 0x01355b,
    0x1fb56a, 0x024b69, 0x011752, 0x175d52, 0x01fb25, 0x009a4b,
    0x0efa4d, 0x0172ad, 0x23cab5, 0x0295ac, 0x012da9, 0x176da9,
    0x023d92, 0x00dd25, 0x132d26, 0x01aa4e, 0x2854ae, 0x02b2b6,
    0x0156b5, 0x1bb6d4, 0x024ea9, 0x010e92, 0x175693, 0x01d527,
    0x006a57, 0x0eca5b, 0x0194da, 0x1fcb6a, 0x029b54, 0x013749,
    0x179b49, 0x021a93, 0x00b52b, 0x13152b, 0x01aa5b, 0x00555a,
    0x0ab56a, 0x015b55, 0x1bdda4, 0x025d49, 0x00fa95, 0x175a95,
    0x01f52d, 0x006aad, 0x0ecab5, 0x0195aa, 0x202da5, 0x028ea5,
    0x015d4a, 0x17b64a, 0x022c97, 0x00d536, 0x133556, 0x01cad5,
    0x0096b2, 0x0ad752, 0x016ea5, 0x18364a, 0x02764b, 0x00f497,
    0x1752ab, 0x01f55b, 0x00aad5, 0x0aeb69, 0x01bb52, 0x1c5b25,
    0x02bb25, 0x013a4b, 0x179a4d, 0x0234ad, 0x00c56d, 0x1315b5,
    0x01cda9, 0x009d52, 0x0afe92, 0x017d25, 0x1bcd26, 0x026a56,
    0x0114ae, 0x1752b6, 0x01f6b5, 0x00ada9, 0x0f0ec9, 0x01ae92,
    0x1c4d26, 0x029527, 0x012a57, 0x1b6a5b, 0x02355a, 0x00cad5,
    0x133b55, 0x01d749, 0x007693, 0x0ada93, 0x01752b, 0x1fb52d,
    0x024a6d, 0x01155a, 0x1775aa, 0x01eb65, 0x00bb4a, 0x0f1d4a,
    0x01ba95, 0x20352b, 0x02952e, 0x012aad, 0x1b8ab5, 0x0235aa,
    0x00cda5, 0x132ea5, 0x01fd4a, 0x006c95, 0x0eac97, 0x017536,
    0x1fd55a, 0x024ad5, 0x0116d2, 0x177752, 0x0216a5, 0x00964b,
    0x12f64b, 0x019497, 0x202957, 0x02655b, 0x012ada, 0x1b8b69,
    0x025b52, 0x00db25, 0x133d25, 0x01da4b, 0x28749b, 0x02b4ad,
    0x01456d, 0x1ba5b5, 0x026daa, 0x011d52, 0x177e92, 0x021d25,
    0x00ba4d, 0x0eea56, 0x0194ae, 0x2029ad, 0x0286b5, 0x012daa,
    0x1796c9, 0x022e93, 0x00ed26, 0x13152b, 0x01aa57, 0x0074b6,
    0x0ad55a, 0x014ad5, 0x1fbb55, 0x027749, 0x011693, 0x175a93,
    0x01f52b, 0x008a5b, 0x12eaad, 0x01956a, 0x242b55, 0x028ba5,
    0x015b4a, 0x1b9d4a, 0x023a95, 0x00d92b, 0x13352e, 0x01aaad,
    0x00756a, 0x0ad5b2, 0x016da5, 0x1baea5, 0x026e4a, 0x010c96,
    0x174c97, 0x01f956, 0x008ab5, 0x0eead6, 0x01b6d2, 0x2c2ea5,
    0x0296a5, 0x01364b, 0x1b9a4b, 0x021497, 0x00a957, 0x17055b,
    0x01cb5a, 0x0076d4, 0x0adb52, 0x017b25, 0x1fdd25, 0x025a4b,
    0x00f4ab, 0x1754ad, 0x01e96d, 0x008b6a, 0x0eedaa, 0x01bd92,
    0x205d25, 0x029d25, 0x013a4d, 0x1b8a56, 0x0234ae, 0x00aaad,
    0x1306d5, 0x01ceaa, 0x008e92, 0x0eae93, 0x016d26, 0x1fb52b,
    0x024a57, 0x00f4b6, 0x17555a, 0x01ead5, 0x00b6ca, 0x12f74a,
    0x019695, 0x20352b, 0x02952b, 0x010a5b, 0x1b6aad, 0x02356a,
    0x00cb55, 0x130ba5, 0x01db4a, 0x007a95, 0x0edc95, 0x01592d,
    0x1fb94e, 0x024aad, 0x01156a, 0x1755b2, 0x01eda5, 0x00bd4a,
    0x130e4a, 0x018d16, 0x20392e, 0x028956, 0x012ab6, 0x1b6ad6,
    0x0236d4, 0x00cea5, 0x133725, 0x01b68b, 0x005517, 0x0ab49b,
    0x014957, 0x1fa95b, 0x026b5a, 0x013754, 0x179b52, 0x021b25,
    0x00ba4b, 0x131a4b, 0x01b4ab, 0x24295b, 0x02896d, 0x014d6a,
    0x1badaa, 0x025d92, 0x00fd25, 0x135d26, 0x01fa55, 0x0074ad,
    0x0ed4b6, 0x016aad, 0x1c35aa, 0x0276aa, 0x010e95, 0x176e93,
    0x022d2a, 0x00aa56, 0x12ea57, 0x01b536, 0x2c4ab5, 0x028ad5,
    0x0156ca, 0x1bb74a, 0x025695, 0x00d62b, 0x17352b, 0x01ca9b,
    0x00955a, 0x0ad56a, 0x016b55, 0x1c374a, 0x029b4a, 0x011a95,
    0x177d15, 0x021a2d, 0x00b29d, 0x12eaad, 0x01b5ac, 0x2c4b69,
    0x02ada5, 0x015d4a, 0x1bae8a, 0x024d16, 0x00fa2e, 0x172956,
    0x01d2b6, 0x0075b5, 0x0ef6d4, 0x016ea9, 0x1c2e8a, 0x02768b,
    0x011517, 0x1b552b, 0x01e95b, 0x00b2d6, 0x130b5a, 0x01bb54,
    0x2856a9, 0x02bb45, 0x015a8b, 0x1b9a95, 0x02352b, 0x00ca5b,
    0x172aad, 0x01d56a, 0x007b55, 0x0efda4, 0x019d45, 0x1fdd46,
    0x027a95, 0x01152d, 0x1b7536, 0x01eab5, 0x00b5aa, 0x1316ca,
    0x01aea5, 0x005d4a, 0x0aad4a, 0x014a96, 0x1b8a97, 0x023556,
    0x00cab5, 0x172ad5, 0x01f6ca, 0x006ea5, 0x0edaa5, 0x01764b,
    0x1fda4b, 0x02529b, 0x00f55b, 0x1b756a, 0x020b69, 0x00d752,
    0x133b52, 0x01db25, 0x247a4b, 0x02ba4d, 0x0152ad, 0x1bb2ad,
    0x0255ad, 0x00eda9, 0x134da9, 0x021d92, 0x00bd25, 0x0eed26,
    0x018a4e, 0x1c34ae, 0x0292b6, 0x0115b5, 0x1796d4, 0x022ea9,
    0x00ee92, 0x131693, 0x01b527, 0x244a57, 0x02aa5b, 0x0152da,
    0x1fab6a, 0x027b54, 0x011749, 0x175b49, 0x01fa93, 0x00952b,
    0x0ef52b, 0x016a5b, 0x20355a, 0x02956a, 0x013b55, 0x179da4,
    0x023d49, 0x00da95, 0x133a95, 0x01b52d, 0x2c4a6d, 0x02aab5,
    0x0175aa, 0x1bb6d2, 0x024ea5, 0x011d4a, 0x17764a, 0x01cc97,
    0x00952e, 0x0ef556, 0x018ab5, 0x1c36aa, 0x029752, 0x012ea5,
    0x1b9b25, 0x02164b, 0x00b497, 0x17149b, 0x01a55b, 0x004ad6,
    0x06ab69, 0x017b52, 0x1fdd52, 0x025b25, 0x00fa4b, 0x175a4d,
    0x01f4ad, 0x00656b, 0x0ed5ad, 0x018da9, 0x205b52, 0x029d92,
    0x013d25, 0x1b8d26, 0x022a4e, 0x00b4ae, 0x1312b6, 0x01b6b5,
    0x006da9, 0x0aaea9, 0x016e92, 0x1bb693, 0x025527, 0x00ca57,
    0x172a5b, 0x01f4da, 0x008ad5, 0x0edb55, 0x019749, 0x1c3693,
    0x029a93, 0x01152b, 0x1b752d, 0x020a5d, 0x00d55a, 0x13156a,
    0x01ab65, 0x007b4a, 0x0add4a,
];

/// Bit t set: add one day to the base of solar term t.
pub(super) const TERM_BITS: [u32; 501] = [
    0x004930, 0x3cd931, 0x7efbb3, 0xfffff7, 0x00493f, 0x3cd931,
    0x7edbb1, 0xfefff7, 0x00493f, 0x1c4931, 0x7edbb1, 0xfefff3,
    0x00413f, 0x1c4930, 0x7edbb1, 0x7efbf3, 0x00412f, 0x184930,
    0x3edbb1, 0x7efbb3, 0x00402f, 0x184930, 0x3cdbb1, 0x7efbb3,
    0x000007, 0x184930, 0x3cdb31, 0x7efbb3, 0x000007, 0x084930,
    0x3cd931, 0x7efbb3, 0x000007, 0x004930, 0x3cd931, 0x7edbb3,
    0x000007, 0x014930, 0x3d4931, 0x7fdbb3, 0x000007, 0x014130,
    0x3d4931, 0x7fdbb1, 0x000003, 0x014530, 0x1d4d30, 0x7fdfb1,
    0x000003, 0x814560, 0x994d70, 0xbddff1, 0x000003, 0x814460,
    0x994d70, 0xbddff1, 0x000003, 0x810440, 0x994d78, 0xbddd79,
    0x00000b, 0x810440, 0x814d78, 0xbddd79, 0x00000b, 0x812440,
    0x816d78, 0xbd6d79, 0x00000b, 0x802440, 0x816578, 0xbd6d79,
    0x00000b, 0x802440, 0x816578, 0xbd6d79, 0x000009, 0x802040,
    0x81657c, 0x9d6d7c, 0x00000d, 0x802000, 0x81646c, 0x996d7c,
    0x00000d, 0x422000, 0xc3246c, 0xdb6d7c, 0x00000d, 0x422280,
    0xc326c4, 0xdb6ffc, 0x00000d, 0x422280, 0xc326c4, 0xc36ffc,
    0x00000d, 0x420280, 0xc226c4, 0xc367fc, 0x3c0800, 0x7e9a82,
    0xfebec6, 0xfffffe, 0x3c080f, 0x7e9a82, 0xfebac6, 0xfffffe,
    0x3c080f, 0x7e9a82, 0xfebac6, 0xfffffe, 0x1c080f, 0x7c9a80,
    0xfeba82, 0xffbeee, 0x18080e, 0x7c9880, 0x7eba82, 0xffbeee,
    0x18080e, 0x3c9800, 0x7eba82, 0xffbec6, 0x18080e, 0x3c9800,
    0x7e9a82, 0xffbec6, 0x00080e, 0x3c0800, 0x7e9a82, 0xfebec6,
    0x00000e, 0x3c0800, 0x7e9a82, 0xfebac6, 0x00000e, 0x3c0800,
    0x7e9a82, 0xfebac6, 0x00000e, 0x3c0800, 0x7e9a82, 0xfebac6,
    0x00000e, 0x180900, 0x7c9b80, 0xfebb82, 0x00000e, 0x184910,
    0x7cd911, 0xfefb93, 0x00000f, 0x184910, 0x3cd911, 0x7edb93,
    0x00000f, 0x184930, 0x3c4931, 0x7edbb3, 0x000007, 0x014130,
    0x3d4931, 0x7fdbb3, 0x000007, 0x014130, 0x3d4931, 0x7fdbb3,
    0x000007, 0x014530, 0x3d4d31, 0x7fdfb3, 0x000007, 0x014430,
    0x3d4d31, 0x7ddfb3, 0x000007, 0x010470, 0x394d71, 0x7dddf3,
    0x000007, 0x010470, 0x194d71, 0x7ddd71, 0x000003, 0x012460,
    0x196d70, 0x3ded71, 0x000003, 0x802440, 0x996570, 0xbd6d71,
    0x000003, 0x802440, 0x816578, 0xbd6d79, 0x00000b, 0x802040,
    0x816578, 0xbd6d79, 0x42928f, 0xc2b2c4, 0xc3f7fc, 0xfffffd,
    0x42928f, 0xc2b2c4, 0xc3b6fc, 0xfffffd, 0x40928f, 0xc2b284,
    0xc3b6fc, 0xfbfffd, 0x40908f, 0xc29284, 0xc3b6fc, 0xdbfffd,
    0x40900d, 0xc29280, 0xc3b6ec, 0xdbf7fc, 0x40000d, 0x429280,
    0xc2b6cc, 0xdbf7fc, 0x00000d, 0x429280, 0xc2b2c4, 0xc3f7fc,
    0x00000d, 0x429280, 0xc2b2c4, 0xc3f7fc, 0x00000d, 0x429280,
    0xc2b2c4, 0xc3b6fc, 0x00000d, 0x429280, 0xc2b2c4, 0xc3b6fc,
    0x00000d, 0x409080, 0xc2b284, 0xc3b6fc, 0x00000d, 0x449000,
    0xc69284, 0xc7b6fc, 0x00000d, 0x640800, 0xe69a82, 0xe6bece,
    0x00000e, 0x640800, 0xe69a82, 0xe6bace, 0x00000e, 0x240800,
    0x669a82, 0xe6bace, 0x00000e, 0x3c0800, 0x7e9a82, 0xfebac6,
    0x00000e, 0x3c0800, 0x7e9a82, 0xfebac6, 0x00000e, 0x3c4900,
    0x7cd982, 0xfefbc6, 0x00000e, 0x384900, 0x7cd982, 0xfedb86,
    0x00000e, 0x384900, 0x7cc902, 0xfedb86, 0x00000e, 0x184100,
    0x7c4902, 0xfedb82, 0x00000e, 0x194130, 0x7d4931, 0xffdbb3,
    0x00000f, 0x194530, 0x3d4d31, 0x7fdfb3, 0x00000f, 0x014530,
    0x3d4d31, 0x7fdfb3, 0x000007, 0x010530, 0x3d4d31, 0x7fdfb3,
    0x822240, 0x832678, 0xbf6f79, 0xfffffb, 0x82020f, 0x832678,
    0xbb6f79, 0xffeffb, 0x82020f, 0x832678, 0xbb6779, 0xff6f7b,
    0x82020f, 0x822678, 0x9b6779, 0xff6f7b, 0x82020f, 0x822268,
    0x9b6779, 0xff6f79, 0x82020b, 0x822248, 0x936778, 0xbf6f79,
    0x02020b, 0x822248, 0x832778, 0xbf6f79, 0x02020b, 0x822240,
    0x832678, 0xbf6f79, 0x00000b, 0x820240, 0x832678, 0xbf6f79,
    0x00000b, 0x821200, 0x833678, 0xbb7779, 0x00000b, 0x829280,
    0x82b6f8, 0xbbf7f9, 0x00000b, 0x829280, 0x82b2f8, 0x9bf7f9,
    0x00000b, 0x829280, 0x82b2e8, 0x9bf7f9, 0x000009, 0x829280,
    0x82b2cc, 0x93b7fc, 0x00000d, 0x429280, 0xc2b2cc, 0xc3b6fc,
    0x00000d, 0x429080, 0xc292c4, 0xc3b6fc, 0x00000d, 0x408080,
    0xc292c4, 0xc3b6fc, 0x00000d, 0x448080, 0xc69284, 0xc7b6fc,
    0x00000d, 0x440800, 0xc69a84, 0xc6bafc, 0x00000d, 0x440800,
    0xc69a84, 0xc6bafc, 0x00000d, 0x640800, 0xe69a84, 0xe6bacc,
    0x00000d, 0x640800, 0xe69a80, 0xe6bacc, 0x00000d, 0x6c4800,
    0xeeda82, 0xeedace, 0x00000e, 0x3c4900, 0x7cc982, 0xfedbc6,
    0x00000e, 0x3c4100, 0x7cc982, 0xfedb86, 0x012470, 0x396571,
    0x7d6df3, 0xfffff7, 0x00247f, 0x396571, 0x7d6d73, 0xfffff7,
    0x00207f, 0x396571, 0x7d6d73, 0xfffff7, 0x00207f, 0x196571,
    0x7d6d73, 0xfffff7, 0x00204f, 0x192571, 0x7d6d73, 0xfffff3,
    0x00204f, 0x112471, 0x7d6d71, 0xfffdf3, 0x00004f, 0x012470,
    0x3d6d71, 0x7dedf3, 0x00004f, 0x012470, 0x396571, 0x7d6df3,
    0x000007, 0x002470, 0x396571, 0x7d6d73, 0x000007, 0x002070,
    0x396571, 0x7d6d73, 0x000007, 0x002070, 0x396571, 0x7d6d73,
    0x000007, 0x002070, 0x392571, 0x7d6d73, 0x000007, 0x002040,
    0x192571, 0x7d6d73, 0x000007, 0x000240, 0x112671, 0x7d6f71,
    0x000003, 0x021240, 0x033670, 0x3f7771, 0x000003, 0x029240,
    0x03b670, 0x3bf771, 0x000003, 0x829240, 0x82b278, 0xbbf779,
    0x00000b, 0x829280, 0x82b2f8, 0xbbf7f9, 0x00000b, 0x829280,
    0x82b2f8, 0xbbb7f9, 0x00000b, 0x829280, 0x82b2f8, 0xbbb7f9,
    0x00000b, 0x829280, 0x8292c8, 0x9bb6f9, 0x00000b, 0x828080,
    0x8292c8, 0x93b6f9, 0x000009, 0x800880, 0x829acc, 0x83befc,
    0x00000d, 0xc00880, 0xc29acc, 0xc3bafc, 0x00000d, 0x440880,
    0xc69a84, 0xc6bafc, 0xffffff,
];

/// Base day of month for each solar term.
pub(super) const TERM_BASE_DAY: [u8; 24] = [5, 19, 3, 18, 5, 20, 4, 19, 5, 20, 5, 20, 6, 22, 7, 22, 7, 22, 7, 22, 6, 21, 6, 21];

/// Per-century extra +1 bit for each term, indexed by
/// year / 100 - TABLE_FIRST_YEAR / 100.
pub(super) const TERM_CENTURY_PLUS: [u32; 6] = [0xffbece, 0xffffff, 0x3c0802, 0x7c9886, 0xfe9a8e, 0x380000];

/// First year within the century from which one day is
/// subtracted again (0xFFFF = never).
pub(super) const TERM_CENTURY_THRESHOLD: [[u16; 24]; 6] = [
    [0xffff, 0xffff, 1877, 1857, 0xffff, 0xffff, 1848, 1888, 0xffff, 1888, 1844, 0xffff, 0xffff, 1864, 0xffff, 0xffff, 1836, 1884, 0xffff, 0xffff, 0xffff, 0xffff, 1884, 1848],
    [1949, 0xffff, 0xffff, 1993, 1948, 1956, 1976, 0xffff, 1944, 0xffff, 1968, 0xffff, 0xffff, 1984, 1948, 0xffff, 1960, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 1988],
    [2085, 2049, 0xffff, 0xffff, 2084, 2084, 0xffff, 0xffff, 2068, 0xffff, 2088, 2048, 0xffff, 0xffff, 2068, 0xffff, 2084, 0xffff, 2044, 2060, 2060, 2048, 0xffff, 0xffff],
    [0xffff, 2189, 2153, 0xffff, 0xffff, 0xffff, 0xffff, 2140, 2192, 0xffff, 0xffff, 2172, 2136, 0xffff, 2188, 2140, 0xffff, 0xffff, 2168, 2188, 2192, 2180, 2156, 0xffff],
    [0xffff, 0xffff, 2289, 2265, 0xffff, 0xffff, 0xffff, 2268, 0xffff, 2252, 0xffff, 2288, 2256, 0xffff, 0xffff, 2260, 0xffff, 2256, 2296, 0xffff, 0xffff, 0xffff, 2292, 2264],
    [0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff, 0xffff],
];
