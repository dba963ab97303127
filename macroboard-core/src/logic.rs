//! Pure Business Logic Functions
//!
//! Farb-Arithmetik ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Gamma-Tabelle (γ = 2.6) für WS2812 LEDs
#[rustfmt::skip]
const GAMMA8: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3,
    3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7,
    7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12,
    13, 13, 13, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20,
    20, 21, 21, 22, 22, 23, 24, 24, 25, 25, 26, 27, 27, 28, 29, 29,
    30, 31, 31, 32, 33, 34, 34, 35, 36, 37, 38, 38, 39, 40, 41, 42,
    42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57,
    58, 59, 60, 61, 62, 63, 64, 65, 66, 68, 69, 70, 71, 72, 73, 75,
    76, 77, 78, 80, 81, 82, 84, 85, 86, 88, 89, 90, 92, 93, 94, 96,
    97, 99, 100, 102, 103, 105, 106, 108, 109, 111, 112, 114, 115, 117, 119, 120,
    122, 124, 125, 127, 129, 130, 132, 134, 136, 137, 139, 141, 143, 145, 146, 148,
    150, 152, 154, 156, 158, 160, 162, 164, 166, 168, 170, 172, 174, 176, 178, 180,
    182, 184, 186, 188, 191, 193, 195, 197, 199, 202, 204, 206, 209, 211, 213, 215,
    218, 220, 223, 225, 227, 230, 232, 235, 237, 240, 242, 245, 247, 250, 252, 255,
];

/// Skaliert einen Farbkanal linear mit `brightness / 255`
///
/// Rechnet mit Ganzzahlen (abgerundet). Helligkeiten über 255 werden
/// nicht begrenzt; das Ergebnis wird auf 8 Bit abgeschnitten.
pub fn scale_channel(value: u8, brightness: u16) -> u8 {
    (u32::from(brightness) * u32::from(value) / 255) as u8
}

/// Skaliert alle drei Kanäle einer Farbe mit `brightness / 255`
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use macroboard_core::scale_brightness;
/// let color = scale_brightness(RGB8 { r: 255, g: 100, b: 0 }, 80);
/// assert_eq!(color, RGB8 { r: 80, g: 31, b: 0 });
/// ```
pub fn scale_brightness(color: RGB8, brightness: u16) -> RGB8 {
    RGB8 {
        r: scale_channel(color.r, brightness),
        g: scale_channel(color.g, brightness),
        b: scale_channel(color.b, brightness),
    }
}

fn step_channel(current: u8, target: u8) -> u8 {
    match current.cmp(&target) {
        core::cmp::Ordering::Less => current + 1,
        core::cmp::Ordering::Greater => current - 1,
        core::cmp::Ordering::Equal => current,
    }
}

/// Bewegt jeden Kanal um genau eine Stufe Richtung Ziel
///
/// Kanäle, die das Ziel schon erreicht haben, bleiben stehen.
pub fn step_toward(current: RGB8, target: RGB8) -> RGB8 {
    RGB8 {
        r: step_channel(current.r, target.r),
        g: step_channel(current.g, target.g),
        b: step_channel(current.b, target.b),
    }
}

/// Anzahl Einzelschritte, die ein Fade von `from` nach `to` braucht
pub fn fade_steps(from: RGB8, to: RGB8) -> u8 {
    from.r
        .abs_diff(to.r)
        .max(from.g.abs_diff(to.g))
        .max(from.b.abs_diff(to.b))
}

/// Wendet die globale Ausgabe-Helligkeit des Pixel-Treibers an
///
/// 255 ist die Identität, 0 schaltet die LED aus.
pub fn output_scale(color: RGB8, brightness: u8) -> RGB8 {
    let scale = |c: u8| ((u16::from(c) * (u16::from(brightness) + 1)) >> 8) as u8;
    RGB8 {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}

/// HSV → RGB auf dem 16-Bit Farbkreis
///
/// `hue` läuft einmal rund über 0..=65535 (Rot → Grün → Blau → Rot),
/// intern in 1530 lineare Stufen aufgeteilt.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use macroboard_core::color_hsv;
/// assert_eq!(color_hsv(0, 255, 255), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(color_hsv(21845, 255, 255), RGB8 { r: 0, g: 255, b: 0 });
/// ```
pub fn color_hsv(hue: u16, sat: u8, val: u8) -> RGB8 {
    let hue = ((u32::from(hue) * 1530 + 32768) / 65536) as u16;

    let (r, g, b): (u16, u16, u16) = match hue {
        0..=254 => (255, hue, 0),
        255..=509 => (510 - hue, 255, 0),
        510..=764 => (0, 255, hue - 510),
        765..=1019 => (0, 1020 - hue, 255),
        1020..=1274 => (hue - 1020, 0, 255),
        1275..=1529 => (255, 0, 1530 - hue),
        _ => (255, 0, 0),
    };

    let v1 = 1 + u32::from(val);
    let s1 = 1 + u32::from(sat);
    let s2 = 255 - u32::from(sat);
    let apply = |c: u16| (((((u32::from(c) * s1) >> 8) + s2) * v1) >> 8) as u8;

    RGB8 {
        r: apply(r),
        g: apply(g),
        b: apply(b),
    }
}

/// Gamma-Korrektur für einen Kanal
pub fn gamma8(value: u8) -> u8 {
    GAMMA8[usize::from(value)]
}

/// Gamma-Korrektur für alle drei Kanäle
pub fn gamma32(color: RGB8) -> RGB8 {
    RGB8 {
        r: gamma8(color.r),
        g: gamma8(color.g),
        b: gamma8(color.b),
    }
}

/// Farbton von Pixel `index` in einem Regenbogen-Frame
///
/// Die Pixel werden gleichmäßig über den Farbkreis verteilt, beginnend
/// bei `first_hue`.
pub fn rainbow_hue(first_hue: u16, index: usize, pixel_count: usize) -> u16 {
    let offset = (index as u32 * 65536 / pixel_count.max(1) as u32) as u16;
    first_hue.wrapping_add(offset)
}
