//! VTuber roster
//!
//! Maps the `vtuberId` carried by each stream to the key of its display
//! name.

use crate::translations::{translate, translate_name, Key, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VTuber {
    pub id: &'static str,
    pub name: Key,
}

const fn vtuber(id: &'static str, name: Key) -> VTuber {
    VTuber { id, name }
}

pub const VTUBERS: &[VTuber] = &[
    vtuber("sora", Key::Sora),
    vtuber("roboco", Key::Roboco),
    vtuber("miko", Key::Miko),
    vtuber("suisei", Key::Suisei),
    vtuber("fubuki", Key::Fubuki),
    vtuber("matsuri", Key::Matsuri),
    vtuber("haato", Key::Haato),
    vtuber("aki", Key::Aki),
    vtuber("mel", Key::Mel),
    vtuber("choco", Key::Choco),
    vtuber("choco_alt", Key::ChocoAlt),
    vtuber("shion", Key::Shion),
    vtuber("aqua", Key::Aqua),
    vtuber("subaru", Key::Subaru),
    vtuber("ayame", Key::Ayame),
    vtuber("pekora", Key::Pekora),
    vtuber("rushia", Key::Rushia),
    vtuber("flare", Key::Flare),
    vtuber("marine", Key::Marine),
    vtuber("noel", Key::Noel),
    vtuber("kanata", Key::Kanata),
    vtuber("coco", Key::Coco),
    vtuber("watame", Key::Watame),
    vtuber("towa", Key::Towa),
    vtuber("himemoriluna", Key::HimemoriLuna),
    vtuber("lamy", Key::Lamy),
    vtuber("nene", Key::Nene),
    vtuber("botan", Key::Botan),
    vtuber("polka", Key::Polka),
    vtuber("mio", Key::Mio),
    vtuber("okayu", Key::Okayu),
    vtuber("korone", Key::Korone),
    vtuber("azki", Key::Azki),
    vtuber("risu", Key::Risu),
    vtuber("moona", Key::Moona),
    vtuber("iofi", Key::Iofi),
    vtuber("ollie", Key::Ollie),
    vtuber("melfissa", Key::Melfissa),
    vtuber("reine", Key::Reine),
    vtuber("amelia", Key::Amelia),
    vtuber("calliope", Key::Calliope),
    vtuber("gura", Key::Gura),
    vtuber("inanis", Key::Inanis),
    vtuber("kiara", Key::Kiara),
    vtuber("miyabi", Key::Miyabi),
    vtuber("izuru", Key::Izuru),
    vtuber("aruran", Key::Aruran),
    vtuber("rikka", Key::Rikka),
    vtuber("astel", Key::Astel),
    vtuber("temma", Key::Temma),
    vtuber("roberu", Key::Roberu),
    vtuber("shien", Key::Shien),
    vtuber("oga", Key::Oga),
    vtuber("hololive", Key::Hololive),
    vtuber("yagoo", Key::Yagoo),
    vtuber("luna", Key::Luna),
    vtuber("nekomiya", Key::Nekomiya),
    vtuber("tamaki", Key::Tamaki),
    vtuber("pph", Key::Pph),
    vtuber("nana", Key::Nana),
    vtuber("ui", Key::Ui),
];

pub fn find(id: &str) -> Option<&'static VTuber> {
    VTUBERS.iter().find(|v| v.id == id)
}

/// Localized name of a VTuber, or the id itself if unknown
pub fn display_name(locale: Locale, id: &str) -> &str {
    match find(id) {
        Some(vtuber) => translate(locale, vtuber.name),
        None => translate_name(locale, id),
    }
}
