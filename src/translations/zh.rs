use super::Key;

pub(super) fn translate(key: Key) -> &'static str {
    match key {
        // UI
        Key::UpdatedAt => "更新于 {$INTERPOLATION}",
        Key::Name => "名稱",
        Key::Total => "總計",
        Key::Subscribers => "訂閱",
        Key::Views => "觀看",
        Key::LastDay => "日增",
        Key::Last7Days => "週增",
        Key::Last30Days => "月增",
        Key::YoutubeChannel => "YouTube 頻道",
        Key::BilibiliChannel => "Bilibili 頻道",
        Key::YoutubeStream => "YouTube 直播",
        Key::YoutubeSchedule => "YouTube 預定直播",
        Key::Settings => "設置",
        Key::ToggleDarkMode => "切換夜間模式",
        Key::AverageViewers => "平均同接",
        Key::MaximumViewers => "最高同接",
        Key::StreamHasEnded => "直播結束",
        Key::Streaming => "正在直播",
        Key::StreamStartTime => "開始時間",
        Key::StreamDuration => "持續時間",
        Key::YoutubeSubscribers => "YouTube 訂閱",
        Key::BilibiliSubscribers => "Bilibili 訂閱",
        Key::YoutubeViews => "YouTube 播放",
        Key::BilibiliViews => "Bilibili 播放",
        Key::VtuberSelected => "已選取的 VTuber",
        Key::SelectLanguage => "選擇語言",
        Key::RecentStreams => "最近直播",
        Key::StreamViewers => "直播同接",

        // VTubers
        Key::Hololive => "ホロライブ公式",
        Key::Yagoo => "YAGOO",
        Key::Sora => "ときのそら",
        Key::Roboco => "ロボ子さん",
        Key::Miko => "さくらみこ",
        Key::Suisei => "星街すいせい",
        Key::Fubuki => "白上フブキ",
        Key::Matsuri => "夏色まつり",
        Key::Haato => "赤井はあと",
        Key::Aki => "アキロゼ",
        Key::Mel => "夜空メル",
        Key::Choco => "癒月ちょこ",
        Key::ChocoAlt => "癒月ちょこ Sub",
        Key::Shion => "紫咲シオン",
        Key::Aqua => "湊あくあ",
        Key::Subaru => "大空スバル",
        Key::Ayame => "百鬼あやめ",
        Key::Pekora => "兎田ぺこら",
        Key::Rushia => "潤羽るしあ",
        Key::Flare => "不知火フレア",
        Key::Marine => "宝鐘マリン",
        Key::Noel => "白銀ノエル",
        Key::Kanata => "天音かなた",
        Key::Coco => "桐生ココ",
        Key::Watame => "角巻わため",
        Key::Towa => "常闇トワ",
        Key::HimemoriLuna => "姫森ルーナ",
        Key::Lamy => "雪花ラミィ",
        Key::Nene => "桃鈴ねね",
        Key::Botan => "獅白ぼたん",
        Key::Polka => "尾丸ポルカ",
        Key::Mio => "大神ミオ",
        Key::Okayu => "猫又おかゆ",
        Key::Korone => "戌神ころね",
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
        Key::Luna => "輝夜月",
        Key::Nekomiya => "猫宮ひなた",
        Key::Tamaki => "犬山たまき",
        Key::Pph => "Pinky Pop Hepburn",
        Key::Nana => "カグラナナ",
        Key::Ui => "しぐれうい",
        Key::Miyabi => "花咲みやび",
        Key::Izuru => "奏手イヅル",
        Key::Aruran => "アルランディス",
        Key::Rikka => "律可",
        Key::Astel => "アステル・レダ",
        Key::Temma => "岸堂天真",
        Key::Roberu => "夕刻ロベル",
        Key::Shien => "影山シエン",
        Key::Oga => "荒咬オウガ",

        // Batches
        Key::HololiveOg => "ホロライブ無印",
        Key::Hololive1st => "ホロライブ1期生",
        Key::Hololive2nd => "ホロライブ2期生",
        Key::Hololive3rd => "ホロライブ3期生",
        Key::Hololive4th => "ホロライブ4期生",
        Key::Hololive5th => "ホロライブ5期生",
        Key::HololiveGamers => "ホロライブゲーマーズ",
        Key::InnkMusic => "イノナカミュージック",
        Key::HololiveId1st => "ホロライブインドネシア1期生",
        Key::HololiveId2nd => "ホロライブインドネシア2期生",
        Key::HololiveEn => "ホロライブ English",
        Key::Holostars1st => "ホロスターズ1期生",
        Key::Holostars2nd => "ホロスターズ2期生",
        Key::Holostars3rd => "ホロスターズ3期生",
        Key::Others => "その他",
    }
}
