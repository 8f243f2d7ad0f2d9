use super::Key;

pub(super) fn translate(key: Key) -> &'static str {
    match key {
        // UI
        Key::UpdatedAt => "Updated at {$INTERPOLATION}",
        Key::Name => "Name",
        Key::Total => "Total",
        Key::Subscribers => "Subscribers",
        Key::Views => "Views",
        Key::LastDay => "Last Day",
        Key::Last7Days => "Last 7 Days",
        Key::Last30Days => "Last 30 Days",
        Key::YoutubeChannel => "YouTube Channel",
        Key::BilibiliChannel => "Bilibili Channel",
        Key::YoutubeStream => "YouTube Stream",
        Key::YoutubeSchedule => "YouTube Schedule",
        Key::Settings => "Settings",
        Key::ToggleDarkMode => "Toggle Dark Mode",
        Key::AverageViewers => "Average Viewers",
        Key::MaximumViewers => "Maximum Viewers",
        Key::StreamHasEnded => "Stream has ended",
        Key::Streaming => "Streaming",
        Key::StreamStartTime => "Start Time",
        Key::StreamDuration => "Duration",
        Key::YoutubeSubscribers => "YouTube Subscribers",
        Key::BilibiliSubscribers => "Bilibili Subscribers",
        Key::YoutubeViews => "YouTube Views",
        Key::BilibiliViews => "Bilibili Views",
        Key::VtuberSelected => "Selected VTubers",
        Key::SelectLanguage => "Select Language",
        Key::RecentStreams => "Recent Streams",
        Key::StreamViewers => "Stream Viewers",

        // VTubers
        Key::Hololive => "hololive Official",
        Key::Yagoo => "YAGOO",
        Key::Sora => "Tokino Sora",
        Key::Roboco => "Roboco",
        Key::Miko => "Sakura Miko",
        Key::Suisei => "Hoshimachi Suisei",
        Key::Fubuki => "Shirakami Fubuki",
        Key::Matsuri => "Natsuiro Matsuri",
        Key::Haato => "Akai Haato",
        Key::Aki => "Aki Rosenthal",
        Key::Mel => "Yozora Mel",
        Key::Choco => "Yuzuki Choco",
        Key::ChocoAlt => "Yuzuki Choco Sub",
        Key::Shion => "Murasaki Shion",
        Key::Aqua => "Minato Aqua",
        Key::Subaru => "Oozora Subaru",
        Key::Ayame => "Nakiri Ayame",
        Key::Pekora => "Usada Pekora",
        Key::Rushia => "Uruha Rushia",
        Key::Flare => "Shiranui Flare",
        Key::Marine => "Houshou Marine",
        Key::Noel => "Shirogane Noel",
        Key::Kanata => "Amane Kanata",
        Key::Coco => "Kiryu Coco",
        Key::Watame => "Tsunomaki Watame",
        Key::Towa => "Tokoyami Towa",
        Key::HimemoriLuna => "Himemori Luna",
        Key::Lamy => "Yukihana Lamy",
        Key::Nene => "Momosuzu Nene",
        Key::Botan => "Shishiro Botan",
        Key::Polka => "Omaru Polka",
        Key::Mio => "Ookami Mio",
        Key::Okayu => "Nekomata Okayu",
        Key::Korone => "Inugami Korone",
        Key::Azki => "AZKi",
        Key::Risu => "Ayunda Risu",
        Key::Moona => "Moona Hoshinova",
        Key::Iofi => "Airani Iofifteen",
        Key::Ollie => "Kureiji Ollie",
        Key::Melfissa => "Anya Melfissa",
        Key::Reine => "Pavolia Reine",
        Key::Amelia => "Watson Amelia",
        Key::Calliope => "Mori Calliope",
        Key::Gura => "Gawr Gura",
        Key::Inanis => "Ninomae Ina'nis",
        Key::Kiara => "Takanashi Kiara",
        Key::Luna => "Kaguya Luna",
        Key::Nekomiya => "Nekomiya Hinata",
        Key::Tamaki => "Inuyama Tamaki",
        Key::Pph => "Pinky Pop Hepburn",
        Key::Nana => "Kagura Nana",
        Key::Ui => "Shigure Ui",
        Key::Miyabi => "Hanasaki Miyabi",
        Key::Izuru => "Kanade Izuru",
        Key::Aruran => "Arurandeisu",
        Key::Rikka => "Rikka",
        Key::Astel => "Astel Leda",
        Key::Temma => "Kishido Temma",
        Key::Roberu => "Yukoku Roberu",
        Key::Shien => "Kageyama Shien",
        Key::Oga => "Aragami Oga",

        // Batches
        Key::HololiveOg => "hololive Original",
        Key::Hololive1st => "hololive 1st Gen",
        Key::Hololive2nd => "hololive 2nd Gen",
        Key::Hololive3rd => "hololive 3rd Gen",
        Key::Hololive4th => "hololive 4th Gen",
        Key::Hololive5th => "hololive 5th Gen",
        Key::HololiveGamers => "hololive GAMERS",
        Key::InnkMusic => "INNK Music",
        Key::HololiveId1st => "hololive Indonesia 1st Gen",
        Key::HololiveId2nd => "hololive Indonesia 2nd Gen",
        Key::HololiveEn => "hololive English",
        Key::Holostars1st => "HOLOSTARS 1st Gen",
        Key::Holostars2nd => "HOLOSTARS 2nd Gen",
        Key::Holostars3rd => "HOLOSTARS 3rd Gen",
        Key::Others => "Others",
    }
}
