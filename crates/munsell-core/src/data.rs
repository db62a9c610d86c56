//! Static Munsell swatch tables.
//!
//! Each hue palette is laid out row-major: eleven value rows from 10 (white)
//! down to 0 (black), fifteen chroma columns from /0 to /28 in steps of two.
//! Colors outside the sRGB gamut are pulled in along the chroma axis, so the
//! right-hand columns of dark and light rows repeat their last reachable color.

use crate::palette::WheelEntry;

/// Flat swatch table, 165 entries per hue palette, 40 palettes.
pub(crate) static MUNSELL: [&str; 6600] = [
    // 2.5R
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F8DDDE", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC", "#FFDADC",
    "#C8C8C8", "#DCC2C3", "#EFBBBE", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA", "#FFB4BA",
    "#ADADAD", "#C1A7A9", "#D3A1A4", "#E4999F", "#F4919B", "#FF8B98", "#FF8B98", "#FF8B98", "#FF8B98", "#FF8B98", "#FF8B98", "#FF8B98", "#FF8B98", "#FF8B98", "#FF8B98",
    "#939393", "#A68D8F", "#B8878A", "#C88086", "#D77781", "#E66E7D", "#F46279", "#FF5775", "#FF5775", "#FF5775", "#FF5775", "#FF5775", "#FF5775", "#FF5775", "#FF5775",
    "#797979", "#8C7475", "#9C6D71", "#AB666C", "#BA5D68", "#C75364", "#D54660", "#E1345C", "#EE1258", "#F00057", "#F00057", "#F00057", "#F00057", "#F00057", "#F00057",
    "#606060", "#715A5C", "#815458", "#8F4C54", "#9C4350", "#A9374C", "#B52648", "#C10044", "#C10044", "#C10044", "#C10044", "#C10044", "#C10044", "#C10044", "#C10044",
    "#484848", "#584244", "#663C40", "#73343C", "#7F2938", "#8B1834", "#930032", "#930032", "#930032", "#930032", "#930032", "#930032", "#930032", "#930032", "#930032",
    "#313131", "#402C2D", "#4D2529", "#581C26", "#630C22", "#680021", "#680021", "#680021", "#680021", "#680021", "#680021", "#680021", "#680021", "#680021", "#680021",
    "#1C1C1C", "#2A1719", "#351015", "#3F0312", "#410011", "#410011", "#410011", "#410011", "#410011", "#410011", "#410011", "#410011", "#410011", "#410011", "#410011",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5R
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F8DDDB", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8", "#FFDBD8",
    "#C8C8C8", "#DCC2C0", "#EFBCB9", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2", "#FFB5B2",
    "#ADADAD", "#C1A8A6", "#D3A19F", "#E49A98", "#F49391", "#FF8C8B", "#FF8C8B", "#FF8C8B", "#FF8C8B", "#FF8C8B", "#FF8C8B", "#FF8C8B", "#FF8C8B", "#FF8C8B", "#FF8C8B",
    "#939393", "#A68E8C", "#B88785", "#C8817E", "#D67977", "#E47070", "#F2656A", "#FF5963", "#FF5963", "#FF5963", "#FF5963", "#FF5963", "#FF5963", "#FF5963", "#FF5963",
    "#797979", "#8C7473", "#9C6E6C", "#AB6765", "#B95F5F", "#C65558", "#D34A51", "#DF3A4B", "#EB2345", "#F20041", "#F20041", "#F20041", "#F20041", "#F20041", "#F20041",
    "#606060", "#715B59", "#815553", "#8F4D4D", "#9B4546", "#A83A40", "#B32C3A", "#BF1234", "#C20032", "#C20032", "#C20032", "#C20032", "#C20032", "#C20032", "#C20032",
    "#484848", "#584241", "#663C3B", "#723535", "#7E2B2F", "#891D29", "#940024", "#940024", "#940024", "#940024", "#940024", "#940024", "#940024", "#940024", "#940024",
    "#313131", "#402C2B", "#4C2625", "#581D20", "#62101A", "#690017", "#690017", "#690017", "#690017", "#690017", "#690017", "#690017", "#690017", "#690017", "#690017",
    "#1C1C1C", "#2A1817", "#351111", "#3F0509", "#420005", "#420005", "#420005", "#420005", "#420005", "#420005", "#420005", "#420005", "#420005", "#420005", "#420005",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5R
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F8DDD9", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5", "#FFDBD5",
    "#C8C8C8", "#DCC2BE", "#EEBCB4", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA", "#FFB6AA",
    "#ADADAD", "#C1A8A4", "#D2A29A", "#E29C90", "#F19587", "#FF8E7E", "#FF8E7E", "#FF8E7E", "#FF8E7E", "#FF8E7E", "#FF8E7E", "#FF8E7E", "#FF8E7E", "#FF8E7E", "#FF8E7E",
    "#939393", "#A68E8A", "#B78881", "#C68277", "#D47B6E", "#E17365", "#EE6A5B", "#FA6052", "#FF5B4E", "#FF5B4E", "#FF5B4E", "#FF5B4E", "#FF5B4E", "#FF5B4E", "#FF5B4E",
    "#797979", "#8B7470", "#9B6F67", "#A9685E", "#B76155", "#C3594C", "#CF4F44", "#DA433B", "#E53332", "#F01728", "#F30025", "#F30025", "#F30025", "#F30025", "#F30025",
    "#606060", "#715B57", "#80554F", "#8D4F46", "#99483D", "#A53E35", "#AF332C", "#BA2224", "#C3001B", "#C3001B", "#C3001B", "#C3001B", "#C3001B", "#C3001B", "#C3001B",
    "#484848", "#57433F", "#653D37", "#71372F", "#7C2E27", "#86231F", "#901116", "#950012", "#950012", "#950012", "#950012", "#950012", "#950012", "#950012", "#950012",
    "#313131", "#3F2C29", "#4B2721", "#561F1A", "#601512", "#690108", "#690007", "#690007", "#690007", "#690007", "#690007", "#690007", "#690007", "#690007", "#690007",
    "#1C1C1C", "#291815", "#34120C", "#3D0900", "#3D0900", "#3D0900", "#3D0900", "#3D0900", "#3D0900", "#3D0900", "#3D0900", "#3D0900", "#3D0900", "#3D0900", "#3D0900",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10R
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F7DED6", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1", "#FFDBD1",
    "#C8C8C8", "#DBC3BC", "#ECBDAF", "#FCB8A3", "#FFB7A1", "#FFB7A1", "#FFB7A1", "#FFB7A1", "#FFB7A1", "#FFB7A1", "#FFB7A1", "#FFB7A1", "#FFB7A1", "#FFB7A1", "#FFB7A1",
    "#ADADAD", "#C0A8A1", "#D1A396", "#E09E8A", "#EE987E", "#FB9172", "#FF8F6E", "#FF8F6E", "#FF8F6E", "#FF8F6E", "#FF8F6E", "#FF8F6E", "#FF8F6E", "#FF8F6E", "#FF8F6E",
    "#939393", "#A58F88", "#B5897C", "#C38471", "#D07E65", "#DD775A", "#E8704E", "#F36742", "#FE5E35", "#FF5D34", "#FF5D34", "#FF5D34", "#FF5D34", "#FF5D34", "#FF5D34",
    "#797979", "#8B756E", "#9A7063", "#A76A58", "#B3644D", "#BE5D42", "#C95536", "#D34C2A", "#DD411C", "#E7320B", "#EB2A00", "#EB2A00", "#EB2A00", "#EB2A00", "#EB2A00",
    "#606060", "#705C55", "#7E574B", "#8A5140", "#964B35", "#A0432A", "#AA3B1F", "#B32F11", "#BC1F00", "#BC1F00", "#BC1F00", "#BC1F00", "#BC1F00", "#BC1F00", "#BC1F00",
    "#484848", "#57433D", "#633E33", "#6E3929", "#78321F", "#822913", "#8B1E06", "#8E1700", "#8E1700", "#8E1700", "#8E1700", "#8E1700", "#8E1700", "#8E1700", "#8E1700",
    "#313131", "#3F2D27", "#4A281E", "#542214", "#5C1A08", "#611500", "#611500", "#611500", "#611500", "#611500", "#611500", "#611500", "#611500", "#611500", "#611500",
    "#1C1C1C", "#291813", "#331306", "#361100", "#361100", "#361100", "#361100", "#361100", "#361100", "#361100", "#361100", "#361100", "#361100", "#361100", "#361100",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5YR
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F5DED4", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC", "#FFDCCC",
    "#C8C8C8", "#DAC3BA", "#EABFAB", "#F8BA9D", "#FFB896", "#FFB896", "#FFB896", "#FFB896", "#FFB896", "#FFB896", "#FFB896", "#FFB896", "#FFB896", "#FFB896", "#FFB896",
    "#ADADAD", "#BFA9A0", "#CEA592", "#DCA084", "#E99B76", "#F49668", "#FF905A", "#FF905A", "#FF905A", "#FF905A", "#FF905A", "#FF905A", "#FF905A", "#FF905A", "#FF905A",
    "#939393", "#A48F86", "#B38B78", "#C0866B", "#CC815D", "#D67C50", "#E17641", "#EA7032", "#F46920", "#FC6101", "#FD6100", "#FD6100", "#FD6100", "#FD6100", "#FD6100",
    "#797979", "#89756C", "#977160", "#A36D53", "#AE6845", "#B86238", "#C25C29", "#CB5517", "#D24F00", "#D24F00", "#D24F00", "#D24F00", "#D24F00", "#D24F00", "#D24F00",
    "#606060", "#6F5C54", "#7C5847", "#87533B", "#914E2E", "#9A4920", "#A3420F", "#A83D00", "#A83D00", "#A83D00", "#A83D00", "#A83D00", "#A83D00", "#A83D00", "#A83D00",
    "#484848", "#56443C", "#614030", "#6B3B24", "#743617", "#7C3007", "#7F2D00", "#7F2D00", "#7F2D00", "#7F2D00", "#7F2D00", "#7F2D00", "#7F2D00", "#7F2D00", "#7F2D00",
    "#313131", "#3E2D26", "#48291A", "#50240E", "#572000", "#572000", "#572000", "#572000", "#572000", "#572000", "#572000", "#572000", "#572000", "#572000", "#572000",
    "#1C1C1C", "#281912", "#311501", "#311500", "#311500", "#311500", "#311500", "#311500", "#311500", "#311500", "#311500", "#311500", "#311500", "#311500", "#311500",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5YR
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F4DFD3", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6", "#FFDCC6",
    "#C8C8C8", "#D8C4B8", "#E6C0A8", "#F3BD98", "#FFB989", "#FFB989", "#FFB989", "#FFB989", "#FFB989", "#FFB989", "#FFB989", "#FFB989", "#FFB989", "#FFB989", "#FFB989",
    "#ADADAD", "#BDAA9E", "#CBA68F", "#D7A27F", "#E29E6F", "#EC9A5F", "#F6964E", "#FF923C", "#FF913B", "#FF913B", "#FF913B", "#FF913B", "#FF913B", "#FF913B", "#FF913B",
    "#939393", "#A29084", "#B08C75", "#BB8966", "#C58557", "#CF8147", "#D87C36", "#E07821", "#E77300", "#E77300", "#E77300", "#E77300", "#E77300", "#E77300", "#E77300",
    "#797979", "#88766B", "#94735D", "#9F6F4E", "#A86B3F", "#B1672F", "#B9631C", "#C05F00", "#C05F00", "#C05F00", "#C05F00", "#C05F00", "#C05F00", "#C05F00", "#C05F00",
    "#606060", "#6E5D52", "#795944", "#835636", "#8B5227", "#934E15", "#994A00", "#994A00", "#994A00", "#994A00", "#994A00", "#994A00", "#994A00", "#994A00", "#994A00",
    "#484848", "#54443A", "#5E412D", "#673E1F", "#6F3A0F", "#743700", "#743700", "#743700", "#743700", "#743700", "#743700", "#743700", "#743700", "#743700", "#743700",
    "#313131", "#3C2E24", "#452B18", "#4D2708", "#502600", "#502600", "#502600", "#502600", "#502600", "#502600", "#502600", "#502600", "#502600", "#502600", "#502600",
    "#1C1C1C", "#271A10", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700", "#2E1700",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5YR
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F2E0D1", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0", "#FFDDC0",
    "#C8C8C8", "#D6C5B7", "#E3C2A6", "#EEBF95", "#F9BC83", "#FFBA78", "#FFBA78", "#FFBA78", "#FFBA78", "#FFBA78", "#FFBA78", "#FFBA78", "#FFBA78", "#FFBA78", "#FFBA78",
    "#ADADAD", "#BBAA9D", "#C8A88C", "#D2A57C", "#DCA26B", "#E59F59", "#ED9B46", "#F49831", "#FB9510", "#FC9400", "#FC9400", "#FC9400", "#FC9400", "#FC9400", "#FC9400",
    "#939393", "#A19083", "#AC8E73", "#B68B63", "#BF8852", "#C78541", "#CF822D", "#D57F10", "#D77E00", "#D77E00", "#D77E00", "#D77E00", "#D77E00", "#D77E00", "#D77E00",
    "#797979", "#86776A", "#91745A", "#9A714B", "#A36E3A", "#AA6B28", "#B0680F", "#B26700", "#B26700", "#B26700", "#B26700", "#B26700", "#B26700", "#B26700", "#B26700",
    "#606060", "#6C5D51", "#765B42", "#7E5833", "#865522", "#8C520C", "#8E5100", "#8E5100", "#8E5100", "#8E5100", "#8E5100", "#8E5100", "#8E5100", "#8E5100", "#8E5100",
    "#484848", "#534539", "#5C432B", "#63401C", "#693D09", "#6B3C00", "#6B3C00", "#6B3C00", "#6B3C00", "#6B3C00", "#6B3C00", "#6B3C00", "#6B3C00", "#6B3C00", "#6B3C00",
    "#313131", "#3B2E24", "#432C16", "#492904", "#4A2900", "#4A2900", "#4A2900", "#4A2900", "#4A2900", "#4A2900", "#4A2900", "#4A2900", "#4A2900", "#4A2900", "#4A2900",
    "#1C1C1C", "#261A0F", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800", "#2B1800",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10YR
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F0E1D1", "#FBDEBE", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8", "#FFDEB8",
    "#C8C8C8", "#D4C6B6", "#DFC3A4", "#E9C192", "#F1BF80", "#F9BD6D", "#FFBB5C", "#FFBB5C", "#FFBB5C", "#FFBB5C", "#FFBB5C", "#FFBB5C", "#FFBB5C", "#FFBB5C", "#FFBB5C",
    "#ADADAD", "#BAAB9C", "#C4A98B", "#CDA779", "#D5A567", "#DCA354", "#E2A140", "#E89F26", "#EC9D00", "#EC9D00", "#EC9D00", "#EC9D00", "#EC9D00", "#EC9D00", "#EC9D00",
    "#939393", "#9F9182", "#A98F72", "#B18D60", "#B98B4F", "#BF893C", "#C58725", "#C98500", "#C98500", "#C98500", "#C98500", "#C98500", "#C98500", "#C98500", "#C98500",
    "#797979", "#857769", "#8E7559", "#957348", "#9C7236", "#A27022", "#A76E00", "#A76E00", "#A76E00", "#A76E00", "#A76E00", "#A76E00", "#A76E00", "#A76E00", "#A76E00",
    "#606060", "#6B5E50", "#735C41", "#7A5A30", "#80581E", "#845703", "#855600", "#855600", "#855600", "#855600", "#855600", "#855600", "#855600", "#855600", "#855600",
    "#484848", "#514639", "#59442A", "#5F4219", "#634003", "#644000", "#644000", "#644000", "#644000", "#644000", "#644000", "#644000", "#644000", "#644000", "#644000",
    "#313131", "#3A2F23", "#402D14", "#452C00", "#452C00", "#452C00", "#452C00", "#452C00", "#452C00", "#452C00", "#452C00", "#452C00", "#452C00", "#452C00", "#452C00",
    "#1C1C1C", "#241B0E", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00", "#281A00",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5Y
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#EEE1D0", "#F7E0BD", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA", "#FFDFAA",
    "#C8C8C8", "#D2C6B5", "#DBC5A3", "#E3C491", "#E9C27E", "#EFC16A", "#F4C055", "#F9BF3D", "#FDBE1A", "#FEBD00", "#FEBD00", "#FEBD00", "#FEBD00", "#FEBD00", "#FEBD00",
    "#ADADAD", "#B7AC9C", "#C0AB8A", "#C7A977", "#CDA865", "#D3A751", "#D7A63B", "#DBA51E", "#DDA400", "#DDA400", "#DDA400", "#DDA400", "#DDA400", "#DDA400", "#DDA400",
    "#939393", "#9D9282", "#A59171", "#AC8F5F", "#B18E4C", "#B68D38", "#BA8C1F", "#BC8B00", "#BC8B00", "#BC8B00", "#BC8B00", "#BC8B00", "#BC8B00", "#BC8B00", "#BC8B00",
    "#797979", "#837869", "#8A7758", "#907646", "#957534", "#99741E", "#9C7300", "#9C7300", "#9C7300", "#9C7300", "#9C7300", "#9C7300", "#9C7300", "#9C7300", "#9C7300",
    "#606060", "#695F50", "#6F5E40", "#755C2F", "#795B1B", "#7C5B00", "#7C5B00", "#7C5B00", "#7C5B00", "#7C5B00", "#7C5B00", "#7C5B00", "#7C5B00", "#7C5B00", "#7C5B00",
    "#484848", "#4F4638", "#554529", "#5A4417", "#5D4300", "#5D4300", "#5D4300", "#5D4300", "#5D4300", "#5D4300", "#5D4300", "#5D4300", "#5D4300", "#5D4300", "#5D4300",
    "#313131", "#383022", "#3D2F13", "#402E00", "#402E00", "#402E00", "#402E00", "#402E00", "#402E00", "#402E00", "#402E00", "#402E00", "#402E00", "#402E00", "#402E00",
    "#1C1C1C", "#231B0D", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00", "#261B00",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5Y
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#EBE2D0", "#F2E2BD", "#F8E1AA", "#FDE096", "#FFE08F", "#FFE08F", "#FFE08F", "#FFE08F", "#FFE08F", "#FFE08F", "#FFE08F", "#FFE08F", "#FFE08F", "#FFE08F",
    "#C8C8C8", "#D0C7B5", "#D6C6A3", "#DCC690", "#E1C67D", "#E5C569", "#E8C553", "#EBC53A", "#EDC411", "#EDC400", "#EDC400", "#EDC400", "#EDC400", "#EDC400", "#EDC400",
    "#ADADAD", "#B5AD9B", "#BBAC89", "#C1AC77", "#C5AB64", "#C8AB50", "#CBAB39", "#CDAA19", "#CEAA00", "#CEAA00", "#CEAA00", "#CEAA00", "#CEAA00", "#CEAA00", "#CEAA00",
    "#939393", "#9B9382", "#A19270", "#A5925E", "#A9914B", "#AC9136", "#AE911C", "#AF9100", "#AF9100", "#AF9100", "#AF9100", "#AF9100", "#AF9100", "#AF9100", "#AF9100",
    "#797979", "#807969", "#867857", "#8A7846", "#8D7833", "#90771C", "#917700", "#917700", "#917700", "#917700", "#917700", "#917700", "#917700", "#917700", "#917700",
    "#606060", "#675F50", "#6C5F3F", "#6F5F2E", "#725E1A", "#735E00", "#735E00", "#735E00", "#735E00", "#735E00", "#735E00", "#735E00", "#735E00", "#735E00", "#735E00",
    "#484848", "#4E4738", "#524728", "#554616", "#564600", "#564600", "#564600", "#564600", "#564600", "#564600", "#564600", "#564600", "#564600", "#564600", "#564600",
    "#313131", "#363022", "#3A3013", "#3C3000", "#3C3000", "#3C3000", "#3C3000", "#3C3000", "#3C3000", "#3C3000", "#3C3000", "#3C3000", "#3C3000", "#3C3000", "#3C3000",
    "#1C1C1C", "#211C0D", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00", "#241C00",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5Y
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#E9E3D0", "#EEE3BD", "#F2E3AA", "#F5E396", "#F8E382", "#FAE46D", "#FBE456", "#FCE439", "#FDE500", "#FDE500", "#FDE500", "#FDE500", "#FDE500", "#FDE500",
    "#C8C8C8", "#CEC8B5", "#D2C8A3", "#D6C890", "#D9C87D", "#DCC869", "#DDC953", "#DEC93A", "#DFC911", "#DFC900", "#DFC900", "#DFC900", "#DFC900", "#DFC900", "#DFC900",
    "#ADADAD", "#B3AD9B", "#B8AD89", "#BBAE77", "#BEAE64", "#C0AE50", "#C1AE39", "#C1AF18", "#C1AF00", "#C1AF00", "#C1AF00", "#C1AF00", "#C1AF00", "#C1AF00", "#C1AF00",
    "#939393", "#999382", "#9D9370", "#A0935E", "#A2944B", "#A49437", "#A4941B", "#A59500", "#A59500", "#A59500", "#A59500", "#A59500", "#A59500", "#A59500", "#A59500",
    "#797979", "#7F7969", "#827A58", "#857A46", "#877A33", "#887A1C", "#887A00", "#887A00", "#887A00", "#887A00", "#887A00", "#887A00", "#887A00", "#887A00", "#887A00",
    "#606060", "#656050", "#68603F", "#6A602E", "#6B611A", "#6C6100", "#6C6100", "#6C6100", "#6C6100", "#6C6100", "#6C6100", "#6C6100", "#6C6100", "#6C6100", "#6C6100",
    "#484848", "#4C4838", "#4F4828", "#504817", "#514800", "#514800", "#514800", "#514800", "#514800", "#514800", "#514800", "#514800", "#514800", "#514800", "#514800",
    "#313131", "#353122", "#373113", "#383100", "#383100", "#383100", "#383100", "#383100", "#383100", "#383100", "#383100", "#383100", "#383100", "#383100", "#383100",
    "#1C1C1C", "#201C0D", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00", "#221C00",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10Y
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#E7E3D0", "#EAE4BE", "#ECE5AB", "#EDE697", "#EEE684", "#EEE76F", "#EEE858", "#EDE93D", "#ECEA0B", "#EBEA00", "#EBEA00", "#EBEA00", "#EBEA00", "#EBEA00",
    "#C8C8C8", "#CCC8B6", "#CEC9A3", "#D0CA91", "#D1CB7E", "#D2CB6A", "#D2CC55", "#D1CD3C", "#D0CE17", "#CFCE00", "#CFCE00", "#CFCE00", "#CFCE00", "#CFCE00", "#CFCE00",
    "#ADADAD", "#B1AE9C", "#B3AF8A", "#B5AF78", "#B6B065", "#B6B151", "#B6B23B", "#B5B31C", "#B4B300", "#B4B300", "#B4B300", "#B4B300", "#B4B300", "#B4B300", "#B4B300",
    "#939393", "#979482", "#999571", "#9A955F", "#9B964C", "#9B9738", "#9A981E", "#999800", "#999800", "#999800", "#999800", "#999800", "#999800", "#999800", "#999800",
    "#797979", "#7D7A69", "#7F7B58", "#807B47", "#807C34", "#7F7D1D", "#7E7E00", "#7E7E00", "#7E7E00", "#7E7E00", "#7E7E00", "#7E7E00", "#7E7E00", "#7E7E00", "#7E7E00",
    "#606060", "#636150", "#656140", "#65622F", "#65631B", "#646300", "#646300", "#646300", "#646300", "#646300", "#646300", "#646300", "#646300", "#646300", "#646300",
    "#484848", "#4A4838", "#4B4929", "#4B4917", "#4B4A00", "#4B4A00", "#4B4A00", "#4B4A00", "#4B4A00", "#4B4A00", "#4B4A00", "#4B4A00", "#4B4A00", "#4B4A00", "#4B4A00",
    "#313131", "#333123", "#343213", "#343300", "#343300", "#343300", "#343300", "#343300", "#343300", "#343300", "#343300", "#343300", "#343300", "#343300", "#343300",
    "#1C1C1C", "#1E1D0E", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00", "#201D00",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5GY
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#E4E4D1", "#E5E5BF", "#E5E7AC", "#E5E89A", "#E4E986", "#E2EB72", "#E0EC5C", "#DDEE43", "#DAEF1C", "#D9EF00", "#D9EF00", "#D9EF00", "#D9EF00", "#D9EF00",
    "#C8C8C8", "#C9C9B6", "#CACAA4", "#CACC92", "#C9CD80", "#C8CE6D", "#C6D058", "#C3D141", "#C0D221", "#BFD300", "#BFD300", "#BFD300", "#BFD300", "#BFD300", "#BFD300",
    "#ADADAD", "#AFAF9C", "#AFB08B", "#AFB179", "#AEB267", "#ADB454", "#AAB53E", "#A7B623", "#A5B700", "#A5B700", "#A5B700", "#A5B700", "#A5B700", "#A5B700", "#A5B700",
    "#939393", "#959483", "#959672", "#959761", "#93984F", "#91993B", "#8F9B22", "#8C9C00", "#8C9C00", "#8C9C00", "#8C9C00", "#8C9C00", "#8C9C00", "#8C9C00", "#8C9C00",
    "#797979", "#7B7B69", "#7B7C59", "#7A7D48", "#797E36", "#767F21", "#748100", "#748100", "#748100", "#748100", "#748100", "#748100", "#748100", "#748100", "#748100",
    "#606060", "#616151", "#616241", "#606330", "#5E651D", "#5B6600", "#5B6600", "#5B6600", "#5B6600", "#5B6600", "#5B6600", "#5B6600", "#5B6600", "#5B6600", "#5B6600",
    "#484848", "#484939", "#484A2A", "#474B19", "#444C02", "#444C00", "#444C00", "#444C00", "#444C00", "#444C00", "#444C00", "#444C00", "#444C00", "#444C00", "#444C00",
    "#313131", "#313223", "#313314", "#2F3400", "#2F3400", "#2F3400", "#2F3400", "#2F3400", "#2F3400", "#2F3400", "#2F3400", "#2F3400", "#2F3400", "#2F3400", "#2F3400",
    "#1C1C1C", "#1D1D0E", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00", "#1D1E00",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5GY
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#E2E5D2", "#E1E7C0", "#DFE8AE", "#DCEA9D", "#D9EC8A", "#D5EE77", "#D1F062", "#CCF24B", "#C7F32C", "#C3F500", "#C3F500", "#C3F500", "#C3F500", "#C3F500",
    "#C8C8C8", "#C7CAB7", "#C6CBA6", "#C3CD95", "#C1CF83", "#BDD171", "#BAD35D", "#B5D448", "#B0D62C", "#ACD800", "#ACD800", "#ACD800", "#ACD800", "#ACD800", "#ACD800",
    "#ADADAD", "#ADAF9D", "#ABB18C", "#A9B37B", "#A6B46A", "#A2B658", "#9EB844", "#9ABA2B", "#95BB00", "#95BB00", "#95BB00", "#95BB00", "#95BB00", "#95BB00", "#95BB00",
    "#939393", "#929583", "#919773", "#8F9863", "#8B9A51", "#889C3F", "#839E29", "#7E9F00", "#7E9F00", "#7E9F00", "#7E9F00", "#7E9F00", "#7E9F00", "#7E9F00", "#7E9F00",
    "#797979", "#797B6A", "#777D5A", "#747E4A", "#718039", "#6D8225", "#688304", "#688300", "#688300", "#688300", "#688300", "#688300", "#688300", "#688300", "#688300",
    "#606060", "#5F6251", "#5D6342", "#5A6532", "#576620", "#526806", "#526800", "#526800", "#526800", "#526800", "#526800", "#526800", "#526800", "#526800", "#526800",
    "#484848", "#474939", "#444B2B", "#414C1B", "#3D4E05", "#3C4E00", "#3C4E00", "#3C4E00", "#3C4E00", "#3C4E00", "#3C4E00", "#3C4E00", "#3C4E00", "#3C4E00", "#3C4E00",
    "#313131", "#303223", "#2D3415", "#2A3502", "#2A3500", "#2A3500", "#2A3500", "#2A3500", "#2A3500", "#2A3500", "#2A3500", "#2A3500", "#2A3500", "#2A3500", "#2A3500",
    "#1C1C1C", "#1B1E0F", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00", "#1B1E00",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5GY
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#DEE6D3", "#D8E9C4", "#D2EBB4", "#CCEEA4", "#C5F194", "#BDF383", "#B5F671", "#ACF85E", "#A2FA48", "#97FD2C", "#8EFE00", "#8EFE00", "#8EFE00", "#8EFE00",
    "#C8C8C8", "#C3CBB9", "#BDCDA9", "#B7D09A", "#B1D38A", "#AAD57A", "#A2D869", "#99DA57", "#90DC43", "#85DE28", "#7DE000", "#7DE000", "#7DE000", "#7DE000", "#7DE000",
    "#ADADAD", "#A9B09F", "#A3B390", "#9DB581", "#97B871", "#8FBA61", "#87BD50", "#7EBF3D", "#74C125", "#6CC300", "#6CC300", "#6CC300", "#6CC300", "#6CC300", "#6CC300",
    "#939393", "#8F9685", "#899977", "#839B68", "#7D9D59", "#75A049", "#6DA237", "#63A420", "#5BA600", "#5BA600", "#5BA600", "#5BA600", "#5BA600", "#5BA600", "#5BA600",
    "#797979", "#757C6C", "#707F5E", "#6A814F", "#638340", "#5B8530", "#52871B", "#4A8900", "#4A8900", "#4A8900", "#4A8900", "#4A8900", "#4A8900", "#4A8900", "#4A8900",
    "#606060", "#5C6253", "#566545", "#506737", "#496928", "#416B15", "#396C00", "#396C00", "#396C00", "#396C00", "#396C00", "#396C00", "#396C00", "#396C00", "#396C00",
    "#484848", "#434A3B", "#3E4C2E", "#384E20", "#30500F", "#295100", "#295100", "#295100", "#295100", "#295100", "#295100", "#295100", "#295100", "#295100", "#295100",
    "#313131", "#2D3325", "#273518", "#203709", "#1D3800", "#1D3800", "#1D3800", "#1D3800", "#1D3800", "#1D3800", "#1D3800", "#1D3800", "#1D3800", "#1D3800", "#1D3800",
    "#1C1C1C", "#181E11", "#152000", "#152000", "#152000", "#152000", "#152000", "#152000", "#152000", "#152000", "#152000", "#152000", "#152000", "#152000", "#152000",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10GY
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#DAE7D6", "#D0EAC9", "#C6EEBB", "#BBF1AE", "#B0F4A0", "#A3F793", "#95FA84", "#86FD75", "#7AFF6B", "#7AFF6B", "#7AFF6B", "#7AFF6B", "#7AFF6B", "#7AFF6B",
    "#C8C8C8", "#BFCCBB", "#B5CFAE", "#ABD3A1", "#A0D694", "#95D987", "#88DC79", "#79DE6B", "#69E15C", "#54E44B", "#36E637", "#00E824", "#00E824", "#00E824", "#00E824",
    "#ADADAD", "#A5B1A1", "#9BB494", "#91B888", "#86BB7B", "#7ABE6E", "#6DC060", "#5DC352", "#4AC542", "#2EC82F", "#00C91E", "#00C91E", "#00C91E", "#00C91E", "#00C91E",
    "#939393", "#8B9787", "#829A7B", "#789D6F", "#6DA062", "#60A355", "#52A547", "#40A838", "#25AA26", "#00AB18", "#00AB18", "#00AB18", "#00AB18", "#00AB18", "#00AB18",
    "#797979", "#717D6E", "#688062", "#5E8356", "#53864A", "#46883D", "#358A2E", "#1B8D1D", "#008E12", "#008E12", "#008E12", "#008E12", "#008E12", "#008E12", "#008E12",
    "#606060", "#586355", "#4F6649", "#45693E", "#396B32", "#2A6E24", "#117013", "#00700C", "#00700C", "#00700C", "#00700C", "#00700C", "#00700C", "#00700C", "#00700C",
    "#484848", "#404B3D", "#374D32", "#2D5027", "#1F521A", "#06540A", "#005406", "#005406", "#005406", "#005406", "#005406", "#005406", "#005406", "#005406", "#005406",
    "#313131", "#293427", "#21361C", "#153811", "#023A01", "#003A00", "#003A00", "#003A00", "#003A00", "#003A00", "#003A00", "#003A00", "#003A00", "#003A00", "#003A00",
    "#1C1C1C", "#151F13", "#0D2104", "#0B2100", "#0B2100", "#0B2100", "#0B2100", "#0B2100", "#0B2100", "#0B2100", "#0B2100", "#0B2100", "#0B2100", "#0B2100", "#0B2100",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5G
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#D6E7D9", "#C8ECCF", "#BAF0C4", "#AAF4BA", "#99F7B0", "#86FBA5", "#6FFE9A", "#68FF98", "#68FF98", "#68FF98", "#68FF98", "#68FF98", "#68FF98", "#68FF98",
    "#C8C8C8", "#BBCCBE", "#AED1B4", "#9FD4AA", "#8FD8A0", "#7EDC96", "#69DF8B", "#4FE281", "#24E576", "#00E673", "#00E673", "#00E673", "#00E673", "#00E673", "#00E673",
    "#ADADAD", "#A1B2A4", "#94B69A", "#85BA90", "#75BD86", "#63C07C", "#4CC372", "#29C668", "#00C863", "#00C863", "#00C863", "#00C863", "#00C863", "#00C863", "#00C863",
    "#939393", "#87988A", "#7A9B81", "#6C9F77", "#5BA26D", "#47A564", "#2BA859", "#00AA53", "#00AA53", "#00AA53", "#00AA53", "#00AA53", "#00AA53", "#00AA53", "#00AA53",
    "#797979", "#6E7E70", "#618167", "#52855E", "#418855", "#298A4B", "#008C43", "#008C43", "#008C43", "#008C43", "#008C43", "#008C43", "#008C43", "#008C43", "#008C43",
    "#606060", "#556457", "#48674F", "#396A46", "#256D3D", "#006F34", "#006F34", "#006F34", "#006F34", "#006F34", "#006F34", "#006F34", "#006F34", "#006F34", "#006F34",
    "#484848", "#3D4B3F", "#304E37", "#1F512E", "#005325", "#005325", "#005325", "#005325", "#005325", "#005325", "#005325", "#005325", "#005325", "#005325", "#005325",
    "#313131", "#263429", "#193721", "#033919", "#003A18", "#003A18", "#003A18", "#003A18", "#003A18", "#003A18", "#003A18", "#003A18", "#003A18", "#003A18", "#003A18",
    "#1C1C1C", "#121F15", "#04220C", "#002209", "#002209", "#002209", "#002209", "#002209", "#002209", "#002209", "#002209", "#002209", "#002209", "#002209", "#002209",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5G
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#D2E8DC", "#C1EDD5", "#AEF2CE", "#99F6C7", "#81FAC1", "#62FEBA", "#52FFB7", "#52FFB7", "#52FFB7", "#52FFB7", "#52FFB7", "#52FFB7", "#52FFB7", "#52FFB7",
    "#C8C8C8", "#B8CDC1", "#A6D2BA", "#93D6B4", "#7EDAAD", "#64DEA6", "#3FE19F", "#00E49B", "#00E49B", "#00E49B", "#00E49B", "#00E49B", "#00E49B", "#00E49B", "#00E49B",
    "#ADADAD", "#9EB2A7", "#8DB7A0", "#79BB9A", "#63BF93", "#46C28D", "#02C686", "#00C686", "#00C686", "#00C686", "#00C686", "#00C686", "#00C686", "#00C686", "#00C686",
    "#939393", "#84988D", "#739C87", "#60A080", "#48A47A", "#21A774", "#00A871", "#00A871", "#00A871", "#00A871", "#00A871", "#00A871", "#00A871", "#00A871", "#00A871",
    "#797979", "#6B7E73", "#5A826D", "#468667", "#2A8961", "#008B5D", "#008B5D", "#008B5D", "#008B5D", "#008B5D", "#008B5D", "#008B5D", "#008B5D", "#008B5D", "#008B5D",
    "#606060", "#52645A", "#416854", "#2B6C4E", "#006E49", "#006E49", "#006E49", "#006E49", "#006E49", "#006E49", "#006E49", "#006E49", "#006E49", "#006E49", "#006E49",
    "#484848", "#3A4C42", "#284F3C", "#0C5237", "#005336", "#005336", "#005336", "#005336", "#005336", "#005336", "#005336", "#005336", "#005336", "#005336", "#005336",
    "#313131", "#23352C", "#103826", "#003924", "#003924", "#003924", "#003924", "#003924", "#003924", "#003924", "#003924", "#003924", "#003924", "#003924", "#003924",
    "#1C1C1C", "#0F2017", "#002213", "#002213", "#002213", "#002213", "#002213", "#002213", "#002213", "#002213", "#002213", "#002213", "#002213", "#002213", "#002213",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5G
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#D0E8DF", "#BCEEDB", "#A5F2D7", "#8CF7D3", "#6CFBCF", "#3AFFCB", "#3AFFCB", "#3AFFCB", "#3AFFCB", "#3AFFCB", "#3AFFCB", "#3AFFCB", "#3AFFCB", "#3AFFCB",
    "#C8C8C8", "#B5CDC4", "#A1D2C0", "#8BD7BC", "#70DBB8", "#4CDFB4", "#00E2B1", "#00E2B1", "#00E2B1", "#00E2B1", "#00E2B1", "#00E2B1", "#00E2B1", "#00E2B1", "#00E2B1",
    "#ADADAD", "#9BB3AA", "#88B7A6", "#71BCA2", "#54C09E", "#23C49A", "#00C499", "#00C499", "#00C499", "#00C499", "#00C499", "#00C499", "#00C499", "#00C499", "#00C499",
    "#939393", "#829890", "#6E9D8C", "#56A188", "#35A584", "#00A782", "#00A782", "#00A782", "#00A782", "#00A782", "#00A782", "#00A782", "#00A782", "#00A782", "#00A782",
    "#797979", "#687E76", "#558372", "#3B876F", "#078A6B", "#008A6B", "#008A6B", "#008A6B", "#008A6B", "#008A6B", "#008A6B", "#008A6B", "#008A6B", "#008A6B", "#008A6B",
    "#606060", "#4F655D", "#3B6959", "#1E6C56", "#006E54", "#006E54", "#006E54", "#006E54", "#006E54", "#006E54", "#006E54", "#006E54", "#006E54", "#006E54", "#006E54",
    "#484848", "#374C44", "#224F41", "#00523E", "#00523E", "#00523E", "#00523E", "#00523E", "#00523E", "#00523E", "#00523E", "#00523E", "#00523E", "#00523E", "#00523E",
    "#313131", "#21352E", "#07382B", "#00392A", "#00392A", "#00392A", "#00392A", "#00392A", "#00392A", "#00392A", "#00392A", "#00392A", "#00392A", "#00392A", "#00392A",
    "#1C1C1C", "#0D2019", "#002118", "#002118", "#002118", "#002118", "#002118", "#002118", "#002118", "#002118", "#002118", "#002118", "#002118", "#002118", "#002118",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10G
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#CEE9E2", "#B8EEE1", "#9EF3DF", "#7FF8DE", "#54FCDD", "#00FFDC", "#00FFDC", "#00FFDC", "#00FFDC", "#00FFDC", "#00FFDC", "#00FFDC", "#00FFDC", "#00FFDC",
    "#C8C8C8", "#B4CDC7", "#9DD3C6", "#83D7C4", "#62DCC3", "#2AE0C2", "#00E1C2", "#00E1C2", "#00E1C2", "#00E1C2", "#00E1C2", "#00E1C2", "#00E1C2", "#00E1C2", "#00E1C2",
    "#ADADAD", "#9AB3AC", "#83B8AB", "#68BCAA", "#43C1A9", "#00C3A8", "#00C3A8", "#00C3A8", "#00C3A8", "#00C3A8", "#00C3A8", "#00C3A8", "#00C3A8", "#00C3A8", "#00C3A8",
    "#939393", "#809992", "#6A9D91", "#4DA290", "#1BA58F", "#00A68F", "#00A68F", "#00A68F", "#00A68F", "#00A68F", "#00A68F", "#00A68F", "#00A68F", "#00A68F", "#00A68F",
    "#797979", "#677E78", "#508377", "#308776", "#008976", "#008976", "#008976", "#008976", "#008976", "#008976", "#008976", "#008976", "#008976", "#008976", "#008976",
    "#606060", "#4E655F", "#36695E", "#096D5D", "#006D5D", "#006D5D", "#006D5D", "#006D5D", "#006D5D", "#006D5D", "#006D5D", "#006D5D", "#006D5D", "#006D5D", "#006D5D",
    "#484848", "#364C47", "#1C5046", "#005245", "#005245", "#005245", "#005245", "#005245", "#005245", "#005245", "#005245", "#005245", "#005245", "#005245", "#005245",
    "#313131", "#1F3530", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F", "#00382F",
    "#1C1C1C", "#0B201B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B", "#00211B",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5BG
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#CDE9E5", "#B4EEE6", "#98F3E8", "#73F8EA", "#38FCEC", "#00FEEC", "#00FEEC", "#00FEEC", "#00FEEC", "#00FEEC", "#00FEEC", "#00FEEC", "#00FEEC", "#00FEEC",
    "#C8C8C8", "#B2CEC9", "#9AD3CB", "#7CD8CD", "#54DCCF", "#00E0D0", "#00E0D0", "#00E0D0", "#00E0D0", "#00E0D0", "#00E0D0", "#00E0D0", "#00E0D0", "#00E0D0", "#00E0D0",
    "#ADADAD", "#98B3AF", "#80B8B1", "#61BDB2", "#30C1B4", "#00C2B5", "#00C2B5", "#00C2B5", "#00C2B5", "#00C2B5", "#00C2B5", "#00C2B5", "#00C2B5", "#00C2B5", "#00C2B5",
    "#939393", "#7F9995", "#669D97", "#45A298", "#00A59A", "#00A59A", "#00A59A", "#00A59A", "#00A59A", "#00A59A", "#00A59A", "#00A59A", "#00A59A", "#00A59A", "#00A59A",
    "#797979", "#657F7B", "#4C837D", "#24877E", "#00887F", "#00887F", "#00887F", "#00887F", "#00887F", "#00887F", "#00887F", "#00887F", "#00887F", "#00887F", "#00887F",
    "#606060", "#4C6561", "#326963", "#006C64", "#006C64", "#006C64", "#006C64", "#006C64", "#006C64", "#006C64", "#006C64", "#006C64", "#006C64", "#006C64", "#006C64",
    "#484848", "#344C49", "#16504A", "#00514B", "#00514B", "#00514B", "#00514B", "#00514B", "#00514B", "#00514B", "#00514B", "#00514B", "#00514B", "#00514B", "#00514B",
    "#313131", "#1E3532", "#003833", "#003833", "#003833", "#003833", "#003833", "#003833", "#003833", "#003833", "#003833", "#003833", "#003833", "#003833", "#003833",
    "#1C1C1C", "#09201E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E", "#00211E",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5BG
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#CCE9E7", "#B2EEEC", "#93F3F1", "#6AF8F5", "#02FCFA", "#00FCFA", "#00FCFA", "#00FCFA", "#00FCFA", "#00FCFA", "#00FCFA", "#00FCFA", "#00FCFA", "#00FCFA",
    "#C8C8C8", "#B1CDCC", "#97D3D1", "#77D8D5", "#48DCDA", "#00DEDC", "#00DEDC", "#00DEDC", "#00DEDC", "#00DEDC", "#00DEDC", "#00DEDC", "#00DEDC", "#00DEDC", "#00DEDC",
    "#ADADAD", "#97B3B2", "#7DB8B6", "#5BBDBB", "#17C1BF", "#00C1BF", "#00C1BF", "#00C1BF", "#00C1BF", "#00C1BF", "#00C1BF", "#00C1BF", "#00C1BF", "#00C1BF", "#00C1BF",
    "#939393", "#7E9998", "#639D9C", "#3DA2A0", "#00A4A3", "#00A4A3", "#00A4A3", "#00A4A3", "#00A4A3", "#00A4A3", "#00A4A3", "#00A4A3", "#00A4A3", "#00A4A3", "#00A4A3",
    "#797979", "#647F7E", "#498382", "#178786", "#008886", "#008886", "#008886", "#008886", "#008886", "#008886", "#008886", "#008886", "#008886", "#008886", "#008886",
    "#606060", "#4B6564", "#2E6968", "#006C6B", "#006C6B", "#006C6B", "#006C6B", "#006C6B", "#006C6B", "#006C6B", "#006C6B", "#006C6B", "#006C6B", "#006C6B", "#006C6B",
    "#484848", "#334C4B", "#10504F", "#005150", "#005150", "#005150", "#005150", "#005150", "#005150", "#005150", "#005150", "#005150", "#005150", "#005150", "#005150",
    "#313131", "#1D3534", "#003737", "#003737", "#003737", "#003737", "#003737", "#003737", "#003737", "#003737", "#003737", "#003737", "#003737", "#003737", "#003737",
    "#1C1C1C", "#072020", "#002120", "#002120", "#002120", "#002120", "#002120", "#002120", "#002120", "#002120", "#002120", "#002120", "#002120", "#002120", "#002120",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5BG
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#CBE8EA", "#B1EEF2", "#90F3F9", "#6DF7FF", "#6DF7FF", "#6DF7FF", "#6DF7FF", "#6DF7FF", "#6DF7FF", "#6DF7FF", "#6DF7FF", "#6DF7FF", "#6DF7FF", "#6DF7FF",
    "#C8C8C8", "#B1CDCF", "#96D2D6", "#74D7DD", "#3EDCE5", "#00DDE7", "#00DDE7", "#00DDE7", "#00DDE7", "#00DDE7", "#00DDE7", "#00DDE7", "#00DDE7", "#00DDE7", "#00DDE7",
    "#ADADAD", "#97B3B4", "#7CB8BB", "#57BCC2", "#00C0C9", "#00C0C9", "#00C0C9", "#00C0C9", "#00C0C9", "#00C0C9", "#00C0C9", "#00C0C9", "#00C0C9", "#00C0C9", "#00C0C9",
    "#939393", "#7D989A", "#629DA1", "#38A1A8", "#00A3AB", "#00A3AB", "#00A3AB", "#00A3AB", "#00A3AB", "#00A3AB", "#00A3AB", "#00A3AB", "#00A3AB", "#00A3AB", "#00A3AB",
    "#797979", "#647E80", "#478387", "#09878D", "#00878E", "#00878E", "#00878E", "#00878E", "#00878E", "#00878E", "#00878E", "#00878E", "#00878E", "#00878E", "#00878E",
    "#606060", "#4B6566", "#2C696D", "#006B70", "#006B70", "#006B70", "#006B70", "#006B70", "#006B70", "#006B70", "#006B70", "#006B70", "#006B70", "#006B70", "#006B70",
    "#484848", "#334C4D", "#0A5054", "#005054", "#005054", "#005054", "#005054", "#005054", "#005054", "#005054", "#005054", "#005054", "#005054", "#005054", "#005054",
    "#313131", "#1C3536", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A", "#00373A",
    "#1C1C1C", "#062021", "#002123", "#002123", "#002123", "#002123", "#002123", "#002123", "#002123", "#002123", "#002123", "#002123", "#002123", "#002123", "#002123",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10BG
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#CCE8ED", "#B1EDF7", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF", "#96F1FF",
    "#C8C8C8", "#B1CDD1", "#96D2DB", "#73D6E5", "#39DBEF", "#00DCF2", "#00DCF2", "#00DCF2", "#00DCF2", "#00DCF2", "#00DCF2", "#00DCF2", "#00DCF2", "#00DCF2", "#00DCF2",
    "#ADADAD", "#97B2B7", "#7CB7C0", "#56BCCA", "#00BFD2", "#00BFD2", "#00BFD2", "#00BFD2", "#00BFD2", "#00BFD2", "#00BFD2", "#00BFD2", "#00BFD2", "#00BFD2", "#00BFD2",
    "#939393", "#7D989C", "#619DA6", "#36A1AF", "#00A3B3", "#00A3B3", "#00A3B3", "#00A3B3", "#00A3B3", "#00A3B3", "#00A3B3", "#00A3B3", "#00A3B3", "#00A3B3", "#00A3B3",
    "#797979", "#647E82", "#47828B", "#008694", "#008694", "#008694", "#008694", "#008694", "#008694", "#008694", "#008694", "#008694", "#008694", "#008694", "#008694",
    "#606060", "#4B6468", "#2B6871", "#006A76", "#006A76", "#006A76", "#006A76", "#006A76", "#006A76", "#006A76", "#006A76", "#006A76", "#006A76", "#006A76", "#006A76",
    "#484848", "#334C50", "#074F58", "#005058", "#005058", "#005058", "#005058", "#005058", "#005058", "#005058", "#005058", "#005058", "#005058", "#005058", "#005058",
    "#313131", "#1C3538", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D", "#00373D",
    "#1C1C1C", "#062023", "#002025", "#002025", "#002025", "#002025", "#002025", "#002025", "#002025", "#002025", "#002025", "#002025", "#002025", "#002025", "#002025",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5B
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#CCE8EF", "#B2ECFB", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF", "#A9EEFF",
    "#C8C8C8", "#B2CDD4", "#97D1E0", "#75D5EC", "#3CDAF8", "#00DBFC", "#00DBFC", "#00DBFC", "#00DBFC", "#00DBFC", "#00DBFC", "#00DBFC", "#00DBFC", "#00DBFC", "#00DBFC",
    "#ADADAD", "#98B2B9", "#7DB6C5", "#58BBD0", "#00BEDB", "#00BEDB", "#00BEDB", "#00BEDB", "#00BEDB", "#00BEDB", "#00BEDB", "#00BEDB", "#00BEDB", "#00BEDB", "#00BEDB",
    "#939393", "#7E989F", "#639CAA", "#38A0B5", "#00A2BB", "#00A2BB", "#00A2BB", "#00A2BB", "#00A2BB", "#00A2BB", "#00A2BB", "#00A2BB", "#00A2BB", "#00A2BB", "#00A2BB",
    "#797979", "#647E84", "#48828F", "#03859A", "#00869B", "#00869B", "#00869B", "#00869B", "#00869B", "#00869B", "#00869B", "#00869B", "#00869B", "#00869B", "#00869B",
    "#606060", "#4B646A", "#2C6875", "#006A7B", "#006A7B", "#006A7B", "#006A7B", "#006A7B", "#006A7B", "#006A7B", "#006A7B", "#006A7B", "#006A7B", "#006A7B", "#006A7B",
    "#484848", "#334B51", "#094F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C", "#004F5C",
    "#313131", "#1C343A", "#003640", "#003640", "#003640", "#003640", "#003640", "#003640", "#003640", "#003640", "#003640", "#003640", "#003640", "#003640", "#003640",
    "#1C1C1C", "#062025", "#002027", "#002027", "#002027", "#002027", "#002027", "#002027", "#002027", "#002027", "#002027", "#002027", "#002027", "#002027", "#002027",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5B
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#CEE7F1", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF", "#B6EBFF",
    "#C8C8C8", "#B3CCD6", "#9AD0E4", "#79D4F2", "#4BD8FF", "#4BD8FF", "#4BD8FF", "#4BD8FF", "#4BD8FF", "#4BD8FF", "#4BD8FF", "#4BD8FF", "#4BD8FF", "#4BD8FF", "#4BD8FF",
    "#ADADAD", "#99B2BB", "#7FB5C9", "#5DB9D6", "#03BDE4", "#00BDE4", "#00BDE4", "#00BDE4", "#00BDE4", "#00BDE4", "#00BDE4", "#00BDE4", "#00BDE4", "#00BDE4", "#00BDE4",
    "#939393", "#7F97A0", "#659BAE", "#3D9FBB", "#00A1C3", "#00A1C3", "#00A1C3", "#00A1C3", "#00A1C3", "#00A1C3", "#00A1C3", "#00A1C3", "#00A1C3", "#00A1C3", "#00A1C3",
    "#797979", "#667D86", "#4B8193", "#1284A0", "#0085A1", "#0085A1", "#0085A1", "#0085A1", "#0085A1", "#0085A1", "#0085A1", "#0085A1", "#0085A1", "#0085A1", "#0085A1",
    "#606060", "#4C646C", "#2F6779", "#006980", "#006980", "#006980", "#006980", "#006980", "#006980", "#006980", "#006980", "#006980", "#006980", "#006980", "#006980",
    "#484848", "#344B53", "#0E4E5F", "#004F61", "#004F61", "#004F61", "#004F61", "#004F61", "#004F61", "#004F61", "#004F61", "#004F61", "#004F61", "#004F61", "#004F61",
    "#313131", "#1D343C", "#003643", "#003643", "#003643", "#003643", "#003643", "#003643", "#003643", "#003643", "#003643", "#003643", "#003643", "#003643", "#003643",
    "#1C1C1C", "#071F26", "#002029", "#002029", "#002029", "#002029", "#002029", "#002029", "#002029", "#002029", "#002029", "#002029", "#002029", "#002029", "#002029",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5B
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#D0E6F3", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF", "#C0E9FF",
    "#C8C8C8", "#B5CBD8", "#9ECFE8", "#81D2F8", "#70D4FF", "#70D4FF", "#70D4FF", "#70D4FF", "#70D4FF", "#70D4FF", "#70D4FF", "#70D4FF", "#70D4FF", "#70D4FF", "#70D4FF",
    "#ADADAD", "#9BB1BD", "#84B4CC", "#65B7DC", "#2DBBEC", "#00BBEF", "#00BBEF", "#00BBEF", "#00BBEF", "#00BBEF", "#00BBEF", "#00BBEF", "#00BBEF", "#00BBEF", "#00BBEF",
    "#939393", "#8197A2", "#6A9AB1", "#479DC0", "#009FCC", "#009FCC", "#009FCC", "#009FCC", "#009FCC", "#009FCC", "#009FCC", "#009FCC", "#009FCC", "#009FCC", "#009FCC",
    "#797979", "#687D88", "#4F8096", "#2483A5", "#0084A9", "#0084A9", "#0084A9", "#0084A9", "#0084A9", "#0084A9", "#0084A9", "#0084A9", "#0084A9", "#0084A9", "#0084A9",
    "#606060", "#4E636E", "#34667C", "#006887", "#006887", "#006887", "#006887", "#006887", "#006887", "#006887", "#006887", "#006887", "#006887", "#006887", "#006887",
    "#484848", "#364A55", "#164D62", "#004E66", "#004E66", "#004E66", "#004E66", "#004E66", "#004E66", "#004E66", "#004E66", "#004E66", "#004E66", "#004E66", "#004E66",
    "#313131", "#1F343D", "#003647", "#003647", "#003647", "#003647", "#003647", "#003647", "#003647", "#003647", "#003647", "#003647", "#003647", "#003647", "#003647",
    "#1C1C1C", "#091F28", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B", "#001F2B",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10B
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#D2E6F5", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF", "#C7E7FF",
    "#C8C8C8", "#B8CAD9", "#A4CDEA", "#8CD0FC", "#86D0FF", "#86D0FF", "#86D0FF", "#86D0FF", "#86D0FF", "#86D0FF", "#86D0FF", "#86D0FF", "#86D0FF", "#86D0FF", "#86D0FF",
    "#ADADAD", "#9DB0BE", "#8AB3CF", "#70B5E0", "#48B8F1", "#00BAFC", "#00BAFC", "#00BAFC", "#00BAFC", "#00BAFC", "#00BAFC", "#00BAFC", "#00BAFC", "#00BAFC", "#00BAFC",
    "#939393", "#8496A4", "#7098B4", "#549BC4", "#189ED5", "#009ED7", "#009ED7", "#009ED7", "#009ED7", "#009ED7", "#009ED7", "#009ED7", "#009ED7", "#009ED7", "#009ED7",
    "#797979", "#6A7C89", "#557E99", "#3481A9", "#0082B2", "#0082B2", "#0082B2", "#0082B2", "#0082B2", "#0082B2", "#0082B2", "#0082B2", "#0082B2", "#0082B2", "#0082B2",
    "#606060", "#51626F", "#3B657E", "#04678E", "#00678E", "#00678E", "#00678E", "#00678E", "#00678E", "#00678E", "#00678E", "#00678E", "#00678E", "#00678E", "#00678E",
    "#484848", "#394A56", "#1F4C64", "#004D6B", "#004D6B", "#004D6B", "#004D6B", "#004D6B", "#004D6B", "#004D6B", "#004D6B", "#004D6B", "#004D6B", "#004D6B", "#004D6B",
    "#313131", "#22333E", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B", "#00354B",
    "#1C1C1C", "#0C1E29", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E", "#001F2E",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5PB
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#D6E5F5", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF", "#CEE6FF",
    "#C8C8C8", "#BBCADA", "#ABCBEC", "#98CDFE", "#97CDFF", "#97CDFF", "#97CDFF", "#97CDFF", "#97CDFF", "#97CDFF", "#97CDFF", "#97CDFF", "#97CDFF", "#97CDFF", "#97CDFF",
    "#ADADAD", "#A1AFBF", "#91B1D1", "#7DB3E3", "#60B5F5", "#48B6FF", "#48B6FF", "#48B6FF", "#48B6FF", "#48B6FF", "#48B6FF", "#48B6FF", "#48B6FF", "#48B6FF", "#48B6FF",
    "#939393", "#8795A4", "#7797B6", "#6199C7", "#3F9AD8", "#009CE4", "#009CE4", "#009CE4", "#009CE4", "#009CE4", "#009CE4", "#009CE4", "#009CE4", "#009CE4", "#009CE4",
    "#797979", "#6D7B8A", "#5D7D9B", "#447FAB", "#0B80BC", "#0081BD", "#0081BD", "#0081BD", "#0081BD", "#0081BD", "#0081BD", "#0081BD", "#0081BD", "#0081BD", "#0081BD",
    "#606060", "#546270", "#426380", "#246590", "#006697", "#006697", "#006697", "#006697", "#006697", "#006697", "#006697", "#006697", "#006697", "#006697", "#006697",
    "#484848", "#3B4957", "#284B66", "#004C72", "#004C72", "#004C72", "#004C72", "#004C72", "#004C72", "#004C72", "#004C72", "#004C72", "#004C72", "#004C72", "#004C72",
    "#313131", "#25323F", "#0B344D", "#003450", "#003450", "#003450", "#003450", "#003450", "#003450", "#003450", "#003450", "#003450", "#003450", "#003450", "#003450",
    "#1C1C1C", "#101E29", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31", "#001F31",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5PB
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#D9E4F6", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF", "#D4E4FF",
    "#C8C8C8", "#BEC9DA", "#B3C9ED", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF", "#A5CAFF",
    "#ADADAD", "#A4AEBF", "#98AFD1", "#8AB0E4", "#77B1F6", "#6BB2FF", "#6BB2FF", "#6BB2FF", "#6BB2FF", "#6BB2FF", "#6BB2FF", "#6BB2FF", "#6BB2FF", "#6BB2FF", "#6BB2FF",
    "#939393", "#8A94A5", "#7E95B6", "#6F96C8", "#5A97DA", "#3698EC", "#0099F5", "#0099F5", "#0099F5", "#0099F5", "#0099F5", "#0099F5", "#0099F5", "#0099F5", "#0099F5",
    "#797979", "#707A8A", "#647B9B", "#547CAC", "#3A7DBE", "#007ECC", "#007ECC", "#007ECC", "#007ECC", "#007ECC", "#007ECC", "#007ECC", "#007ECC", "#007ECC", "#007ECC",
    "#606060", "#576170", "#4B6280", "#376391", "#0A64A2", "#0064A3", "#0064A3", "#0064A3", "#0064A3", "#0064A3", "#0064A3", "#0064A3", "#0064A3", "#0064A3", "#0064A3",
    "#484848", "#3F4857", "#314966", "#174A76", "#004A7B", "#004A7B", "#004A7B", "#004A7B", "#004A7B", "#004A7B", "#004A7B", "#004A7B", "#004A7B", "#004A7B", "#004A7B",
    "#313131", "#28313F", "#18324E", "#003357", "#003357", "#003357", "#003357", "#003357", "#003357", "#003357", "#003357", "#003357", "#003357", "#003357", "#003357",
    "#1C1C1C", "#131D2A", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36", "#001E36",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5PB
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#DDE3F6", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF", "#DAE2FF",
    "#C8C8C8", "#C2C8DA", "#BBC7EC", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF", "#B2C7FF",
    "#ADADAD", "#A8ADBF", "#A0ADD1", "#97ADE3", "#8CADF5", "#84ADFF", "#84ADFF", "#84ADFF", "#84ADFF", "#84ADFF", "#84ADFF", "#84ADFF", "#84ADFF", "#84ADFF", "#84ADFF",
    "#939393", "#8E93A5", "#8693B6", "#7D93C7", "#7093D9", "#5F93EA", "#4593FC", "#3F93FF", "#3F93FF", "#3F93FF", "#3F93FF", "#3F93FF", "#3F93FF", "#3F93FF", "#3F93FF",
    "#797979", "#74798A", "#6C799B", "#6279AC", "#5479BD", "#3F79CE", "#097ADF", "#007AE0", "#007AE0", "#007AE0", "#007AE0", "#007AE0", "#007AE0", "#007AE0", "#007AE0",
    "#606060", "#5B6070", "#536080", "#476090", "#3660A1", "#0E60B1", "#0060B3", "#0060B3", "#0060B3", "#0060B3", "#0060B3", "#0060B3", "#0060B3", "#0060B3", "#0060B3",
    "#484848", "#424757", "#3A4766", "#2C4776", "#0E4885", "#004888", "#004888", "#004888", "#004888", "#004888", "#004888", "#004888", "#004888", "#004888", "#004888",
    "#313131", "#2B313F", "#22314E", "#0D315C", "#003160", "#003160", "#003160", "#003160", "#003160", "#003160", "#003160", "#003160", "#003160", "#003160", "#003160",
    "#1C1C1C", "#171C2A", "#091C37", "#001C3C", "#001C3C", "#001C3C", "#001C3C", "#001C3C", "#001C3C", "#001C3C", "#001C3C", "#001C3C", "#001C3C", "#001C3C", "#001C3C",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10PB
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#E1E1F5", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF", "#E0E1FF",
    "#C8C8C8", "#C6C6D9", "#C3C5EB", "#BFC4FC", "#BFC4FF", "#BFC4FF", "#BFC4FF", "#BFC4FF", "#BFC4FF", "#BFC4FF", "#BFC4FF", "#BFC4FF", "#BFC4FF", "#BFC4FF", "#BFC4FF",
    "#ADADAD", "#ACACBE", "#A9ABCF", "#A5AAE1", "#9FA8F2", "#9AA8FF", "#9AA8FF", "#9AA8FF", "#9AA8FF", "#9AA8FF", "#9AA8FF", "#9AA8FF", "#9AA8FF", "#9AA8FF", "#9AA8FF",
    "#939393", "#9192A4", "#8E91B4", "#8A90C5", "#848FD6", "#7D8EE6", "#738DF7", "#6D8CFF", "#6D8CFF", "#6D8CFF", "#6D8CFF", "#6D8CFF", "#6D8CFF", "#6D8CFF", "#6D8CFF",
    "#797979", "#787889", "#747799", "#7076A9", "#6975BA", "#6074CA", "#5473DA", "#4172EB", "#1D72FC", "#0C72FF", "#0C72FF", "#0C72FF", "#0C72FF", "#0C72FF", "#0C72FF",
    "#606060", "#5E5F6F", "#5B5E7F", "#565D8E", "#4E5C9E", "#435BAE", "#315ABD", "#005ACE", "#005ACE", "#005ACE", "#005ACE", "#005ACE", "#005ACE", "#005ACE", "#005ACE",
    "#484848", "#464656", "#424565", "#3C4473", "#324482", "#204392", "#00439D", "#00439D", "#00439D", "#00439D", "#00439D", "#00439D", "#00439D", "#00439D", "#00439D",
    "#313131", "#2F303E", "#2A2F4C", "#222E5A", "#122D69", "#002D6F", "#002D6F", "#002D6F", "#002D6F", "#002D6F", "#002D6F", "#002D6F", "#002D6F", "#002D6F", "#002D6F",
    "#1C1C1C", "#1A1B29", "#141B36", "#061A43", "#001A46", "#001A46", "#001A46", "#001A46", "#001A46", "#001A46", "#001A46", "#001A46", "#001A46", "#001A46", "#001A46",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5P
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#E5E0F3", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF", "#E6DFFF",
    "#C8C8C8", "#CAC5D8", "#CBC3E8", "#CCC1F8", "#CCC0FF", "#CCC0FF", "#CCC0FF", "#CCC0FF", "#CCC0FF", "#CCC0FF", "#CCC0FF", "#CCC0FF", "#CCC0FF", "#CCC0FF", "#CCC0FF",
    "#ADADAD", "#AFABBD", "#B1A9CD", "#B1A6DD", "#B1A4EC", "#B0A1FC", "#B0A1FF", "#B0A1FF", "#B0A1FF", "#B0A1FF", "#B0A1FF", "#B0A1FF", "#B0A1FF", "#B0A1FF", "#B0A1FF",
    "#939393", "#9591A3", "#968FB2", "#978CC1", "#968AD1", "#9588E0", "#9385F0", "#9083FF", "#9083FF", "#9083FF", "#9083FF", "#9083FF", "#9083FF", "#9083FF", "#9083FF",
    "#797979", "#7B7788", "#7C7597", "#7C73A6", "#7B71B5", "#7A6EC4", "#776CD3", "#7269E2", "#6C67F2", "#6665FF", "#6665FF", "#6665FF", "#6665FF", "#6665FF", "#6665FF",
    "#606060", "#625E6E", "#625C7C", "#625A8B", "#615799", "#5E55A7", "#5A53B6", "#5450C5", "#4B4ED4", "#3F4BE3", "#2B49F2", "#0047FF", "#0047FF", "#0047FF", "#0047FF",
    "#484848", "#494655", "#494362", "#484170", "#463F7E", "#423D8C", "#3C3B9A", "#3338A8", "#2336B7", "#0034C3", "#0034C3", "#0034C3", "#0034C3", "#0034C3", "#0034C3",
    "#313131", "#322F3D", "#322D4A", "#302B57", "#2D2964", "#262771", "#1A257F", "#00228B", "#00228B", "#00228B", "#00228B", "#00228B", "#00228B", "#00228B", "#00228B",
    "#1C1C1C", "#1D1B28", "#1C1934", "#191740", "#12154C", "#011359", "#001359", "#001359", "#001359", "#001359", "#001359", "#001359", "#001359", "#001359", "#001359",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5P
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#E9DFF2", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF", "#EEDCFF",
    "#C8C8C8", "#CEC4D6", "#D3C1E4", "#D8BDF3", "#DCBAFF", "#DCBAFF", "#DCBAFF", "#DCBAFF", "#DCBAFF", "#DCBAFF", "#DCBAFF", "#DCBAFF", "#DCBAFF", "#DCBAFF", "#DCBAFF",
    "#ADADAD", "#B3AABB", "#B8A7C9", "#BDA3D7", "#C19FE5", "#C59BF3", "#C898FF", "#C898FF", "#C898FF", "#C898FF", "#C898FF", "#C898FF", "#C898FF", "#C898FF", "#C898FF",
    "#939393", "#9990A1", "#9E8DAE", "#A289BC", "#A686CA", "#AA82D7", "#AD7DE5", "#AF79F3", "#B175FF", "#B175FF", "#B175FF", "#B175FF", "#B175FF", "#B175FF", "#B175FF",
    "#797979", "#7F7687", "#837394", "#8770A1", "#8B6CAE", "#8E68BB", "#9164C9", "#935FD6", "#955AE4", "#9655F1", "#964FFF", "#964FFF", "#964FFF", "#964FFF", "#964FFF",
    "#606060", "#655D6D", "#695A79", "#6D5686", "#705392", "#734F9F", "#754AAC", "#7645B9", "#7740C6", "#783AD4", "#7732E1", "#762AEE", "#751EFC", "#741AFF", "#741AFF",
    "#484848", "#4C4553", "#50425F", "#533E6B", "#563A78", "#583684", "#593190", "#5A2C9D", "#5A25A9", "#591DB6", "#5711C3", "#5500CE", "#5500CE", "#5500CE", "#5500CE",
    "#313131", "#352E3C", "#382B47", "#3B2853", "#3D245E", "#3E1F6A", "#3E1976", "#3E1282", "#3C068E", "#3B0094", "#3B0094", "#3B0094", "#3B0094", "#3B0094", "#3B0094",
    "#1C1C1C", "#201A27", "#231731", "#25133C", "#250F47", "#250852", "#23015D", "#23005F", "#23005F", "#23005F", "#23005F", "#23005F", "#23005F", "#23005F", "#23005F",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5P
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#ECDFEF", "#F6DAFC", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF", "#F8D9FF",
    "#C8C8C8", "#D1C4D4", "#DABFE0", "#E3BAEC", "#EBB5F8", "#EFB2FF", "#EFB2FF", "#EFB2FF", "#EFB2FF", "#EFB2FF", "#EFB2FF", "#EFB2FF", "#EFB2FF", "#EFB2FF", "#EFB2FF",
    "#ADADAD", "#B6A9B9", "#BFA5C5", "#C7A0D1", "#CF9BDD", "#D796E8", "#DE90F4", "#E58AFF", "#E58AFF", "#E58AFF", "#E58AFF", "#E58AFF", "#E58AFF", "#E58AFF", "#E58AFF",
    "#939393", "#9C8F9F", "#A48BAA", "#AC86B6", "#B481C1", "#BB7CCD", "#C276D8", "#C96FE4", "#CF67EF", "#D55FFB", "#D75BFF", "#D75BFF", "#D75BFF", "#D75BFF", "#D75BFF",
    "#797979", "#827685", "#8A7190", "#916D9B", "#9868A6", "#9F62B1", "#A65BBC", "#AC54C7", "#B24CD3", "#B841DE", "#BD34E9", "#C321F5", "#C700FE", "#C700FE", "#C700FE",
    "#606060", "#685C6B", "#705875", "#775380", "#7D4E8B", "#834895", "#8941A0", "#8F39AB", "#952EB6", "#9A1FC1", "#9F00CB", "#9F00CB", "#9F00CB", "#9F00CB", "#9F00CB",
    "#484848", "#4F4452", "#56405C", "#5D3B66", "#633670", "#682F7A", "#6E2685", "#731B8F", "#78059A", "#78009B", "#78009B", "#78009B", "#78009B", "#78009B", "#78009B",
    "#313131", "#382D3A", "#3E2944", "#44244D", "#491E57", "#4E1561", "#53076B", "#55006E", "#55006E", "#55006E", "#55006E", "#55006E", "#55006E", "#55006E", "#55006E",
    "#1C1C1C", "#231925", "#28152E", "#2D0F37", "#320640", "#340046", "#340046", "#340046", "#340046", "#340046", "#340046", "#340046", "#340046", "#340046", "#340046",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10P
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F0DEED", "#FCD8F6", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9", "#FFD7F9",
    "#C8C8C8", "#D4C3D1", "#E0BEDB", "#ECB8E4", "#F7B2EE", "#FFADF5", "#FFADF5", "#FFADF5", "#FFADF5", "#FFADF5", "#FFADF5", "#FFADF5", "#FFADF5", "#FFADF5", "#FFADF5",
    "#ADADAD", "#BAA9B7", "#C5A3C0", "#D09EC9", "#DB97D2", "#E690DC", "#F089E5", "#FA80EE", "#FF7BF3", "#FF7BF3", "#FF7BF3", "#FF7BF3", "#FF7BF3", "#FF7BF3", "#FF7BF3",
    "#939393", "#9F8F9C", "#AA89A5", "#B584AE", "#BF7DB7", "#C976C0", "#D36EC9", "#DD65D2", "#E65ADB", "#EF4DE4", "#F93BED", "#FF28F4", "#FF28F4", "#FF28F4", "#FF28F4",
    "#797979", "#857582", "#8F708B", "#9A6A93", "#A3649C", "#AD5CA5", "#B653AE", "#BF49B6", "#C83BBF", "#D128C8", "#D900D0", "#D900D0", "#D900D0", "#D900D0", "#D900D0",
    "#606060", "#6B5C68", "#755771", "#7F5179", "#884A81", "#91428A", "#993892", "#A22A9A", "#AA13A3", "#AE00A6", "#AE00A6", "#AE00A6", "#AE00A6", "#AE00A6", "#AE00A6",
    "#484848", "#52434F", "#5B3E57", "#64385F", "#6D3167", "#75276F", "#7D1977", "#84007E", "#84007E", "#84007E", "#84007E", "#84007E", "#84007E", "#84007E", "#84007E",
    "#313131", "#3A2D38", "#432840", "#4B2147", "#53184F", "#5A0856", "#5D0059", "#5D0059", "#5D0059", "#5D0059", "#5D0059", "#5D0059", "#5D0059", "#5D0059", "#5D0059",
    "#1C1C1C", "#251823", "#2D132A", "#340B31", "#3A0037", "#3A0037", "#3A0037", "#3A0037", "#3A0037", "#3A0037", "#3A0037", "#3A0037", "#3A0037", "#3A0037", "#3A0037",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 2.5RP
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F2DDEA", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF", "#FFD8EF",
    "#C8C8C8", "#D7C2CE", "#E6BCD5", "#F3B6DC", "#FFB0E1", "#FFB0E1", "#FFB0E1", "#FFB0E1", "#FFB0E1", "#FFB0E1", "#FFB0E1", "#FFB0E1", "#FFB0E1", "#FFB0E1", "#FFB0E1",
    "#ADADAD", "#BCA8B4", "#CAA2BA", "#D89BC1", "#E594C7", "#F18CCE", "#FE83D4", "#FF82D5", "#FF82D5", "#FF82D5", "#FF82D5", "#FF82D5", "#FF82D5", "#FF82D5", "#FF82D5",
    "#939393", "#A28E9A", "#AF88A0", "#BC82A6", "#C97AAC", "#D572B3", "#E168B9", "#EC5CBF", "#F84DC5", "#FF41C9", "#FF41C9", "#FF41C9", "#FF41C9", "#FF41C9", "#FF41C9",
    "#797979", "#87747F", "#946E86", "#A0688C", "#AC6092", "#B85798", "#C34C9E", "#CE3EA4", "#D929AA", "#E200AF", "#E200AF", "#E200AF", "#E200AF", "#E200AF", "#E200AF",
    "#606060", "#6D5B66", "#79556C", "#854E71", "#904677", "#9B3C7D", "#A62F83", "#B01989", "#B5008B", "#B5008B", "#B5008B", "#B5008B", "#B5008B", "#B5008B", "#B5008B",
    "#484848", "#54434D", "#5F3D53", "#6A3658", "#742D5E", "#7F2063", "#880569", "#8A0069", "#8A0069", "#8A0069", "#8A0069", "#8A0069", "#8A0069", "#8A0069", "#8A0069",
    "#313131", "#3C2C36", "#47263B", "#511E40", "#5A1246", "#61004A", "#61004A", "#61004A", "#61004A", "#61004A", "#61004A", "#61004A", "#61004A", "#61004A", "#61004A",
    "#1C1C1C", "#271821", "#301126", "#39072B", "#3D002D", "#3D002D", "#3D002D", "#3D002D", "#3D002D", "#3D002D", "#3D002D", "#3D002D", "#3D002D", "#3D002D", "#3D002D",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 5RP
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F5DDE6", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9", "#FFD9E9",
    "#C8C8C8", "#D9C2CB", "#EABBCF", "#F9B4D2", "#FFB1D4", "#FFB1D4", "#FFB1D4", "#FFB1D4", "#FFB1D4", "#FFB1D4", "#FFB1D4", "#FFB1D4", "#FFB1D4", "#FFB1D4", "#FFB1D4",
    "#ADADAD", "#BEA8B1", "#CEA1B4", "#DD9AB8", "#EC92BB", "#FA89BF", "#FF86C0", "#FF86C0", "#FF86C0", "#FF86C0", "#FF86C0", "#FF86C0", "#FF86C0", "#FF86C0", "#FF86C0",
    "#939393", "#A48E97", "#B3879A", "#C2809D", "#D078A1", "#DD6EA4", "#EA63A7", "#F755AB", "#FF4BAD", "#FF4BAD", "#FF4BAD", "#FF4BAD", "#FF4BAD", "#FF4BAD", "#FF4BAD",
    "#797979", "#89747D", "#986E80", "#A66683", "#B35E86", "#C0548A", "#CC478D", "#D93590", "#E51593", "#E80094", "#E80094", "#E80094", "#E80094", "#E80094", "#E80094",
    "#606060", "#6F5B63", "#7D5466", "#8A4D69", "#96446C", "#A23870", "#AE2773", "#BA0076", "#BA0076", "#BA0076", "#BA0076", "#BA0076", "#BA0076", "#BA0076", "#BA0076",
    "#484848", "#56424A", "#623C4D", "#6F3450", "#7A2953", "#851956", "#8D0058", "#8D0058", "#8D0058", "#8D0058", "#8D0058", "#8D0058", "#8D0058", "#8D0058", "#8D0058",
    "#313131", "#3E2C34", "#4A2536", "#551C39", "#5F0D3C", "#64003D", "#64003D", "#64003D", "#64003D", "#64003D", "#64003D", "#64003D", "#64003D", "#64003D", "#64003D",
    "#1C1C1C", "#28171F", "#331021", "#3C0424", "#3F0025", "#3F0025", "#3F0025", "#3F0025", "#3F0025", "#3F0025", "#3F0025", "#3F0025", "#3F0025", "#3F0025", "#3F0025",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 7.5RP
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F6DDE4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4", "#FFD9E4",
    "#C8C8C8", "#DBC2C9", "#ECBBC9", "#FDB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA", "#FFB3CA",
    "#ADADAD", "#C0A7AE", "#D1A1AF", "#E199B0", "#F191B0", "#FF88B1", "#FF88B1", "#FF88B1", "#FF88B1", "#FF88B1", "#FF88B1", "#FF88B1", "#FF88B1", "#FF88B1", "#FF88B1",
    "#939393", "#A58D94", "#B58795", "#C57F95", "#D47796", "#E26D97", "#F06198", "#FD5299", "#FF5099", "#FF5099", "#FF5099", "#FF5099", "#FF5099", "#FF5099", "#FF5099",
    "#797979", "#8A747A", "#9A6D7B", "#A9667C", "#B75D7C", "#C4527D", "#D2447E", "#DE317F", "#EB037F", "#EB0080", "#EB0080", "#EB0080", "#EB0080", "#EB0080", "#EB0080",
    "#606060", "#705A61", "#7F5461", "#8D4C62", "#9A4263", "#A73664", "#B32364", "#BD0065", "#BD0065", "#BD0065", "#BD0065", "#BD0065", "#BD0065", "#BD0065", "#BD0065",
    "#484848", "#574248", "#643C49", "#713349", "#7D284A", "#89164B", "#8F004B", "#8F004B", "#8F004B", "#8F004B", "#8F004B", "#8F004B", "#8F004B", "#8F004B", "#8F004B",
    "#313131", "#3F2C31", "#4B2532", "#571B33", "#620A33", "#660034", "#660034", "#660034", "#660034", "#660034", "#660034", "#660034", "#660034", "#660034", "#660034",
    "#1C1C1C", "#29171D", "#34101D", "#3E031E", "#40001E", "#40001E", "#40001E", "#40001E", "#40001E", "#40001E", "#40001E", "#40001E", "#40001E", "#40001E", "#40001E",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
    // 10RP
    "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
    "#E3E3E3", "#F7DCE1", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0", "#FFDAE0",
    "#C8C8C8", "#DCC2C6", "#EEBBC4", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2", "#FFB4C2",
    "#ADADAD", "#C1A7AB", "#D3A1A9", "#E399A7", "#F391A6", "#FF8AA4", "#FF8AA4", "#FF8AA4", "#FF8AA4", "#FF8AA4", "#FF8AA4", "#FF8AA4", "#FF8AA4", "#FF8AA4", "#FF8AA4",
    "#939393", "#A68D91", "#B7878F", "#C77F8E", "#D6768C", "#E56C8A", "#F36088", "#FF5487", "#FF5487", "#FF5487", "#FF5487", "#FF5487", "#FF5487", "#FF5487", "#FF5487",
    "#797979", "#8B7478", "#9C6D76", "#AB6574", "#B95C72", "#C75170", "#D4446F", "#E1306D", "#EE016C", "#EE006C", "#EE006C", "#EE006C", "#EE006C", "#EE006C", "#EE006C",
    "#606060", "#715A5E", "#80545C", "#8E4C5B", "#9C4259", "#A93657", "#B52356", "#BF0055", "#BF0055", "#BF0055", "#BF0055", "#BF0055", "#BF0055", "#BF0055", "#BF0055",
    "#484848", "#574246", "#663B44", "#733343", "#7F2841", "#8B1540", "#91003F", "#91003F", "#91003F", "#91003F", "#91003F", "#91003F", "#91003F", "#91003F", "#91003F",
    "#313131", "#402C2F", "#4C252E", "#581B2C", "#63092B", "#67002A", "#67002A", "#67002A", "#67002A", "#67002A", "#67002A", "#67002A", "#67002A", "#67002A", "#67002A",
    "#1C1C1C", "#2A171B", "#351019", "#3F0218", "#410018", "#410018", "#410018", "#410018", "#410018", "#410018", "#410018", "#410018", "#410018", "#410018", "#410018",
    "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000", "#000000",
];

/// One representative swatch (value 6, chroma 8) per hue palette.
pub(crate) static COLORS40: [WheelEntry; 40] = [
    WheelEntry::new("2.5R", "Red", "#D77781"),
    WheelEntry::new("5R", "Red", "#D67977"),
    WheelEntry::new("7.5R", "Red", "#D47B6E"),
    WheelEntry::new("10R", "Red", "#D07E65"),
    WheelEntry::new("2.5YR", "Yellow-Red", "#CC815D"),
    WheelEntry::new("5YR", "Yellow-Red", "#C58557"),
    WheelEntry::new("7.5YR", "Yellow-Red", "#BF8852"),
    WheelEntry::new("10YR", "Yellow-Red", "#B98B4F"),
    WheelEntry::new("2.5Y", "Yellow", "#B18E4C"),
    WheelEntry::new("5Y", "Yellow", "#A9914B"),
    WheelEntry::new("7.5Y", "Yellow", "#A2944B"),
    WheelEntry::new("10Y", "Yellow", "#9B964C"),
    WheelEntry::new("2.5GY", "Green-Yellow", "#93984F"),
    WheelEntry::new("5GY", "Green-Yellow", "#8B9A51"),
    WheelEntry::new("7.5GY", "Green-Yellow", "#7D9D59"),
    WheelEntry::new("10GY", "Green-Yellow", "#6DA062"),
    WheelEntry::new("2.5G", "Green", "#5BA26D"),
    WheelEntry::new("5G", "Green", "#48A47A"),
    WheelEntry::new("7.5G", "Green", "#35A584"),
    WheelEntry::new("10G", "Green", "#1BA58F"),
    WheelEntry::new("2.5BG", "Blue-Green", "#00A59A"),
    WheelEntry::new("5BG", "Blue-Green", "#00A4A3"),
    WheelEntry::new("7.5BG", "Blue-Green", "#00A3AB"),
    WheelEntry::new("10BG", "Blue-Green", "#00A3B3"),
    WheelEntry::new("2.5B", "Blue", "#00A2BB"),
    WheelEntry::new("5B", "Blue", "#00A1C3"),
    WheelEntry::new("7.5B", "Blue", "#009FCC"),
    WheelEntry::new("10B", "Blue", "#189ED5"),
    WheelEntry::new("2.5PB", "Purple-Blue", "#3F9AD8"),
    WheelEntry::new("5PB", "Purple-Blue", "#5A97DA"),
    WheelEntry::new("7.5PB", "Purple-Blue", "#7093D9"),
    WheelEntry::new("10PB", "Purple-Blue", "#848FD6"),
    WheelEntry::new("2.5P", "Purple", "#968AD1"),
    WheelEntry::new("5P", "Purple", "#A686CA"),
    WheelEntry::new("7.5P", "Purple", "#B481C1"),
    WheelEntry::new("10P", "Purple", "#BF7DB7"),
    WheelEntry::new("2.5RP", "Red-Purple", "#C97AAC"),
    WheelEntry::new("5RP", "Red-Purple", "#D078A1"),
    WheelEntry::new("7.5RP", "Red-Purple", "#D47796"),
    WheelEntry::new("10RP", "Red-Purple", "#D6768C"),
];
