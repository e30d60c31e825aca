//! The 147 named colors of CSS / SVG 1.1 (W3C).

use chromatic_core::Rgb;

use crate::NamedColors;

pub const ALICEBLUE: Rgb = Rgb::from_u8(240, 248, 255);
pub const ANTIQUEWHITE: Rgb = Rgb::from_u8(250, 235, 215);
pub const AQUA: Rgb = Rgb::from_u8(0, 255, 255);
pub const AQUAMARINE: Rgb = Rgb::from_u8(127, 255, 212);
pub const AZURE: Rgb = Rgb::from_u8(240, 255, 255);
pub const BEIGE: Rgb = Rgb::from_u8(245, 245, 220);
pub const BISQUE: Rgb = Rgb::from_u8(255, 228, 196);
pub const BLACK: Rgb = Rgb::from_u8(0, 0, 0);
pub const BLANCHEDALMOND: Rgb = Rgb::from_u8(255, 235, 205);
pub const BLUE: Rgb = Rgb::from_u8(0, 0, 255);
pub const BLUEVIOLET: Rgb = Rgb::from_u8(138, 43, 226);
pub const BROWN: Rgb = Rgb::from_u8(165, 42, 42);
pub const BURLYWOOD: Rgb = Rgb::from_u8(222, 184, 135);
pub const CADETBLUE: Rgb = Rgb::from_u8(95, 158, 160);
pub const CHARTREUSE: Rgb = Rgb::from_u8(127, 255, 0);
pub const CHOCOLATE: Rgb = Rgb::from_u8(210, 105, 30);
pub const CORAL: Rgb = Rgb::from_u8(255, 127, 80);
pub const CORNFLOWERBLUE: Rgb = Rgb::from_u8(100, 149, 237);
pub const CORNSILK: Rgb = Rgb::from_u8(255, 248, 220);
pub const CRIMSON: Rgb = Rgb::from_u8(220, 20, 60);
pub const CYAN: Rgb = Rgb::from_u8(0, 255, 255);
pub const DARKBLUE: Rgb = Rgb::from_u8(0, 0, 139);
pub const DARKCYAN: Rgb = Rgb::from_u8(0, 139, 139);
pub const DARKGOLDENROD: Rgb = Rgb::from_u8(184, 134, 11);
pub const DARKGRAY: Rgb = Rgb::from_u8(169, 169, 169);
pub const DARKGREEN: Rgb = Rgb::from_u8(0, 100, 0);
pub const DARKGREY: Rgb = Rgb::from_u8(169, 169, 169);
pub const DARKKHAKI: Rgb = Rgb::from_u8(189, 183, 107);
pub const DARKMAGENTA: Rgb = Rgb::from_u8(139, 0, 139);
pub const DARKOLIVEGREEN: Rgb = Rgb::from_u8(85, 107, 47);
pub const DARKORANGE: Rgb = Rgb::from_u8(255, 140, 0);
pub const DARKORCHID: Rgb = Rgb::from_u8(153, 50, 204);
pub const DARKRED: Rgb = Rgb::from_u8(139, 0, 0);
pub const DARKSALMON: Rgb = Rgb::from_u8(233, 150, 122);
pub const DARKSEAGREEN: Rgb = Rgb::from_u8(143, 188, 143);
pub const DARKSLATEBLUE: Rgb = Rgb::from_u8(72, 61, 139);
pub const DARKSLATEGRAY: Rgb = Rgb::from_u8(47, 79, 79);
pub const DARKSLATEGREY: Rgb = Rgb::from_u8(47, 79, 79);
pub const DARKTURQUOISE: Rgb = Rgb::from_u8(0, 206, 209);
pub const DARKVIOLET: Rgb = Rgb::from_u8(148, 0, 211);
pub const DEEPPINK: Rgb = Rgb::from_u8(255, 20, 147);
pub const DEEPSKYBLUE: Rgb = Rgb::from_u8(0, 191, 255);
pub const DIMGRAY: Rgb = Rgb::from_u8(105, 105, 105);
pub const DIMGREY: Rgb = Rgb::from_u8(105, 105, 105);
pub const DODGERBLUE: Rgb = Rgb::from_u8(30, 144, 255);
pub const FIREBRICK: Rgb = Rgb::from_u8(178, 34, 34);
pub const FLORALWHITE: Rgb = Rgb::from_u8(255, 250, 240);
pub const FORESTGREEN: Rgb = Rgb::from_u8(34, 139, 34);
pub const FUCHSIA: Rgb = Rgb::from_u8(255, 0, 255);
pub const GAINSBORO: Rgb = Rgb::from_u8(220, 220, 220);
pub const GHOSTWHITE: Rgb = Rgb::from_u8(248, 248, 255);
pub const GOLD: Rgb = Rgb::from_u8(255, 215, 0);
pub const GOLDENROD: Rgb = Rgb::from_u8(218, 165, 32);
pub const GRAY: Rgb = Rgb::from_u8(128, 128, 128);
pub const GREY: Rgb = Rgb::from_u8(128, 128, 128);
pub const GREEN: Rgb = Rgb::from_u8(0, 128, 0);
pub const GREENYELLOW: Rgb = Rgb::from_u8(173, 255, 47);
pub const HONEYDEW: Rgb = Rgb::from_u8(240, 255, 240);
pub const HOTPINK: Rgb = Rgb::from_u8(255, 105, 180);
pub const INDIANRED: Rgb = Rgb::from_u8(205, 92, 92);
pub const INDIGO: Rgb = Rgb::from_u8(75, 0, 130);
pub const IVORY: Rgb = Rgb::from_u8(255, 255, 240);
pub const KHAKI: Rgb = Rgb::from_u8(240, 230, 140);
pub const LAVENDER: Rgb = Rgb::from_u8(230, 230, 250);
pub const LAVENDERBLUSH: Rgb = Rgb::from_u8(255, 240, 245);
pub const LAWNGREEN: Rgb = Rgb::from_u8(124, 252, 0);
pub const LEMONCHIFFON: Rgb = Rgb::from_u8(255, 250, 205);
pub const LIGHTBLUE: Rgb = Rgb::from_u8(173, 216, 230);
pub const LIGHTCORAL: Rgb = Rgb::from_u8(240, 128, 128);
pub const LIGHTCYAN: Rgb = Rgb::from_u8(224, 255, 255);
pub const LIGHTGOLDENRODYELLOW: Rgb = Rgb::from_u8(250, 250, 210);
pub const LIGHTGRAY: Rgb = Rgb::from_u8(211, 211, 211);
pub const LIGHTGREEN: Rgb = Rgb::from_u8(144, 238, 144);
pub const LIGHTGREY: Rgb = Rgb::from_u8(211, 211, 211);
pub const LIGHTPINK: Rgb = Rgb::from_u8(255, 182, 193);
pub const LIGHTSALMON: Rgb = Rgb::from_u8(255, 160, 122);
pub const LIGHTSEAGREEN: Rgb = Rgb::from_u8(32, 178, 170);
pub const LIGHTSKYBLUE: Rgb = Rgb::from_u8(135, 206, 250);
pub const LIGHTSLATEGRAY: Rgb = Rgb::from_u8(119, 136, 153);
pub const LIGHTSLATEGREY: Rgb = Rgb::from_u8(119, 136, 153);
pub const LIGHTSTEELBLUE: Rgb = Rgb::from_u8(176, 196, 222);
pub const LIGHTYELLOW: Rgb = Rgb::from_u8(255, 255, 224);
pub const LIME: Rgb = Rgb::from_u8(0, 255, 0);
pub const LIMEGREEN: Rgb = Rgb::from_u8(50, 205, 50);
pub const LINEN: Rgb = Rgb::from_u8(250, 240, 230);
pub const MAGENTA: Rgb = Rgb::from_u8(255, 0, 255);
pub const MAROON: Rgb = Rgb::from_u8(128, 0, 0);
pub const MEDIUMAQUAMARINE: Rgb = Rgb::from_u8(102, 205, 170);
pub const MEDIUMBLUE: Rgb = Rgb::from_u8(0, 0, 205);
pub const MEDIUMORCHID: Rgb = Rgb::from_u8(186, 85, 211);
pub const MEDIUMPURPLE: Rgb = Rgb::from_u8(147, 112, 219);
pub const MEDIUMSEAGREEN: Rgb = Rgb::from_u8(60, 179, 113);
pub const MEDIUMSLATEBLUE: Rgb = Rgb::from_u8(123, 104, 238);
pub const MEDIUMSPRINGGREEN: Rgb = Rgb::from_u8(0, 250, 154);
pub const MEDIUMTURQUOISE: Rgb = Rgb::from_u8(72, 209, 204);
pub const MEDIUMVIOLETRED: Rgb = Rgb::from_u8(199, 21, 133);
pub const MIDNIGHTBLUE: Rgb = Rgb::from_u8(25, 25, 112);
pub const MINTCREAM: Rgb = Rgb::from_u8(245, 255, 250);
pub const MISTYROSE: Rgb = Rgb::from_u8(255, 228, 225);
pub const MOCCASIN: Rgb = Rgb::from_u8(255, 228, 181);
pub const NAVAJOWHITE: Rgb = Rgb::from_u8(255, 222, 173);
pub const NAVY: Rgb = Rgb::from_u8(0, 0, 128);
pub const OLDLACE: Rgb = Rgb::from_u8(253, 245, 230);
pub const OLIVE: Rgb = Rgb::from_u8(128, 128, 0);
pub const OLIVEDRAB: Rgb = Rgb::from_u8(107, 142, 35);
pub const ORANGE: Rgb = Rgb::from_u8(255, 165, 0);
pub const ORANGERED: Rgb = Rgb::from_u8(255, 69, 0);
pub const ORCHID: Rgb = Rgb::from_u8(218, 112, 214);
pub const PALEGOLDENROD: Rgb = Rgb::from_u8(238, 232, 170);
pub const PALEGREEN: Rgb = Rgb::from_u8(152, 251, 152);
pub const PALETURQUOISE: Rgb = Rgb::from_u8(175, 238, 238);
pub const PALEVIOLETRED: Rgb = Rgb::from_u8(219, 112, 147);
pub const PAPAYAWHIP: Rgb = Rgb::from_u8(255, 239, 213);
pub const PEACHPUFF: Rgb = Rgb::from_u8(255, 218, 185);
pub const PERU: Rgb = Rgb::from_u8(205, 133, 63);
pub const PINK: Rgb = Rgb::from_u8(255, 192, 203);
pub const PLUM: Rgb = Rgb::from_u8(221, 160, 221);
pub const POWDERBLUE: Rgb = Rgb::from_u8(176, 224, 230);
pub const PURPLE: Rgb = Rgb::from_u8(128, 0, 128);
pub const RED: Rgb = Rgb::from_u8(255, 0, 0);
pub const ROSYBROWN: Rgb = Rgb::from_u8(188, 143, 143);
pub const ROYALBLUE: Rgb = Rgb::from_u8(65, 105, 225);
pub const SADDLEBROWN: Rgb = Rgb::from_u8(139, 69, 19);
pub const SALMON: Rgb = Rgb::from_u8(250, 128, 114);
pub const SANDYBROWN: Rgb = Rgb::from_u8(244, 164, 96);
pub const SEAGREEN: Rgb = Rgb::from_u8(46, 139, 87);
pub const SEASHELL: Rgb = Rgb::from_u8(255, 245, 238);
pub const SIENNA: Rgb = Rgb::from_u8(160, 82, 45);
pub const SILVER: Rgb = Rgb::from_u8(192, 192, 192);
pub const SKYBLUE: Rgb = Rgb::from_u8(135, 206, 235);
pub const SLATEBLUE: Rgb = Rgb::from_u8(106, 90, 205);
pub const SLATEGRAY: Rgb = Rgb::from_u8(112, 128, 144);
pub const SLATEGREY: Rgb = Rgb::from_u8(112, 128, 144);
pub const SNOW: Rgb = Rgb::from_u8(255, 250, 250);
pub const SPRINGGREEN: Rgb = Rgb::from_u8(0, 255, 127);
pub const STEELBLUE: Rgb = Rgb::from_u8(70, 130, 180);
pub const TAN: Rgb = Rgb::from_u8(210, 180, 140);
pub const TEAL: Rgb = Rgb::from_u8(0, 128, 128);
pub const THISTLE: Rgb = Rgb::from_u8(216, 191, 216);
pub const TOMATO: Rgb = Rgb::from_u8(255, 99, 71);
pub const TURQUOISE: Rgb = Rgb::from_u8(64, 224, 208);
pub const VIOLET: Rgb = Rgb::from_u8(238, 130, 238);
pub const WHEAT: Rgb = Rgb::from_u8(245, 222, 179);
pub const WHITE: Rgb = Rgb::from_u8(255, 255, 255);
pub const WHITESMOKE: Rgb = Rgb::from_u8(245, 245, 245);
pub const YELLOW: Rgb = Rgb::from_u8(255, 255, 0);
pub const YELLOWGREEN: Rgb = Rgb::from_u8(154, 205, 50);

/// All W3C colors, sorted by name.
pub const W3C: NamedColors = NamedColors::new(
    "w3c",
    &[
        ("aliceblue", ALICEBLUE),
        ("antiquewhite", ANTIQUEWHITE),
        ("aqua", AQUA),
        ("aquamarine", AQUAMARINE),
        ("azure", AZURE),
        ("beige", BEIGE),
        ("bisque", BISQUE),
        ("black", BLACK),
        ("blanchedalmond", BLANCHEDALMOND),
        ("blue", BLUE),
        ("blueviolet", BLUEVIOLET),
        ("brown", BROWN),
        ("burlywood", BURLYWOOD),
        ("cadetblue", CADETBLUE),
        ("chartreuse", CHARTREUSE),
        ("chocolate", CHOCOLATE),
        ("coral", CORAL),
        ("cornflowerblue", CORNFLOWERBLUE),
        ("cornsilk", CORNSILK),
        ("crimson", CRIMSON),
        ("cyan", CYAN),
        ("darkblue", DARKBLUE),
        ("darkcyan", DARKCYAN),
        ("darkgoldenrod", DARKGOLDENROD),
        ("darkgray", DARKGRAY),
        ("darkgreen", DARKGREEN),
        ("darkgrey", DARKGREY),
        ("darkkhaki", DARKKHAKI),
        ("darkmagenta", DARKMAGENTA),
        ("darkolivegreen", DARKOLIVEGREEN),
        ("darkorange", DARKORANGE),
        ("darkorchid", DARKORCHID),
        ("darkred", DARKRED),
        ("darksalmon", DARKSALMON),
        ("darkseagreen", DARKSEAGREEN),
        ("darkslateblue", DARKSLATEBLUE),
        ("darkslategray", DARKSLATEGRAY),
        ("darkslategrey", DARKSLATEGREY),
        ("darkturquoise", DARKTURQUOISE),
        ("darkviolet", DARKVIOLET),
        ("deeppink", DEEPPINK),
        ("deepskyblue", DEEPSKYBLUE),
        ("dimgray", DIMGRAY),
        ("dimgrey", DIMGREY),
        ("dodgerblue", DODGERBLUE),
        ("firebrick", FIREBRICK),
        ("floralwhite", FLORALWHITE),
        ("forestgreen", FORESTGREEN),
        ("fuchsia", FUCHSIA),
        ("gainsboro", GAINSBORO),
        ("ghostwhite", GHOSTWHITE),
        ("gold", GOLD),
        ("goldenrod", GOLDENROD),
        ("gray", GRAY),
        ("green", GREEN),
        ("greenyellow", GREENYELLOW),
        ("grey", GREY),
        ("honeydew", HONEYDEW),
        ("hotpink", HOTPINK),
        ("indianred", INDIANRED),
        ("indigo", INDIGO),
        ("ivory", IVORY),
        ("khaki", KHAKI),
        ("lavender", LAVENDER),
        ("lavenderblush", LAVENDERBLUSH),
        ("lawngreen", LAWNGREEN),
        ("lemonchiffon", LEMONCHIFFON),
        ("lightblue", LIGHTBLUE),
        ("lightcoral", LIGHTCORAL),
        ("lightcyan", LIGHTCYAN),
        ("lightgoldenrodyellow", LIGHTGOLDENRODYELLOW),
        ("lightgray", LIGHTGRAY),
        ("lightgreen", LIGHTGREEN),
        ("lightgrey", LIGHTGREY),
        ("lightpink", LIGHTPINK),
        ("lightsalmon", LIGHTSALMON),
        ("lightseagreen", LIGHTSEAGREEN),
        ("lightskyblue", LIGHTSKYBLUE),
        ("lightslategray", LIGHTSLATEGRAY),
        ("lightslategrey", LIGHTSLATEGREY),
        ("lightsteelblue", LIGHTSTEELBLUE),
        ("lightyellow", LIGHTYELLOW),
        ("lime", LIME),
        ("limegreen", LIMEGREEN),
        ("linen", LINEN),
        ("magenta", MAGENTA),
        ("maroon", MAROON),
        ("mediumaquamarine", MEDIUMAQUAMARINE),
        ("mediumblue", MEDIUMBLUE),
        ("mediumorchid", MEDIUMORCHID),
        ("mediumpurple", MEDIUMPURPLE),
        ("mediumseagreen", MEDIUMSEAGREEN),
        ("mediumslateblue", MEDIUMSLATEBLUE),
        ("mediumspringgreen", MEDIUMSPRINGGREEN),
        ("mediumturquoise", MEDIUMTURQUOISE),
        ("mediumvioletred", MEDIUMVIOLETRED),
        ("midnightblue", MIDNIGHTBLUE),
        ("mintcream", MINTCREAM),
        ("mistyrose", MISTYROSE),
        ("moccasin", MOCCASIN),
        ("navajowhite", NAVAJOWHITE),
        ("navy", NAVY),
        ("oldlace", OLDLACE),
        ("olive", OLIVE),
        ("olivedrab", OLIVEDRAB),
        ("orange", ORANGE),
        ("orangered", ORANGERED),
        ("orchid", ORCHID),
        ("palegoldenrod", PALEGOLDENROD),
        ("palegreen", PALEGREEN),
        ("paleturquoise", PALETURQUOISE),
        ("palevioletred", PALEVIOLETRED),
        ("papayawhip", PAPAYAWHIP),
        ("peachpuff", PEACHPUFF),
        ("peru", PERU),
        ("pink", PINK),
        ("plum", PLUM),
        ("powderblue", POWDERBLUE),
        ("purple", PURPLE),
        ("red", RED),
        ("rosybrown", ROSYBROWN),
        ("royalblue", ROYALBLUE),
        ("saddlebrown", SADDLEBROWN),
        ("salmon", SALMON),
        ("sandybrown", SANDYBROWN),
        ("seagreen", SEAGREEN),
        ("seashell", SEASHELL),
        ("sienna", SIENNA),
        ("silver", SILVER),
        ("skyblue", SKYBLUE),
        ("slateblue", SLATEBLUE),
        ("slategray", SLATEGRAY),
        ("slategrey", SLATEGREY),
        ("snow", SNOW),
        ("springgreen", SPRINGGREEN),
        ("steelblue", STEELBLUE),
        ("tan", TAN),
        ("teal", TEAL),
        ("thistle", THISTLE),
        ("tomato", TOMATO),
        ("turquoise", TURQUOISE),
        ("violet", VIOLET),
        ("wheat", WHEAT),
        ("white", WHITE),
        ("whitesmoke", WHITESMOKE),
        ("yellow", YELLOW),
        ("yellowgreen", YELLOWGREEN),
    ],
);
