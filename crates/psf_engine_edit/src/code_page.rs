//! Code page 437 symbols used to label glyphs in the character overview.

/// CP437 symbols, 16 per row. Control codes use their IBM PC graphics.
const CP437_ROWS: [&str; 16] = [
    " ☺☻♥♦♣♠•◘○◙♂♀♪♫☼",
    "►◄↕‼¶§▬↨↑↓→←∟↔▲▼",
    " !\"#$%&'()*+,-./",
    "0123456789:;<=>?",
    "@ABCDEFGHIJKLMNO",
    "PQRSTUVWXYZ[\\]^_",
    "`abcdefghijklmno",
    "pqrstuvwxyz{|}~⌂",
    "ÇüéâäàåçêëèïîìÄÅ",
    "ÉæÆôöòûùÿÖÜ¢£¥₧ƒ",
    "áíóúñÑªº¿⌐¬½¼¡«»",
    "░▒▓│┤╡╢╖╕╣║╗╝╜╛┐",
    "└┴┬├─┼╞╟╚╔╩╦╠═╬╧",
    "╨╤╥╙╘╒╓╫╪┘┌█▄▌▐▀",
    "αßΓπΣσµτΦΘΩδ∞φε∩",
    "≡±≥≤⌠⌡÷≈°∙·√ⁿ²■ ",
];

/// Symbol shown for glyph `index`, `None` past the first 256 glyphs.
pub fn glyph_label(index: usize) -> Option<char> {
    CP437_ROWS.get(index / 16).and_then(|row| row.chars().nth(index % 16))
}

/// Quoted caption drawn below a glyph thumbnail, e.g. `"A"`.
pub fn glyph_caption(index: usize) -> Option<String> {
    glyph_label(index).map(|ch| format!("\"{ch}\""))
}
