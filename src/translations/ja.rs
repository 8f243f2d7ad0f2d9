use super::Key;

pub(super) fn translate(key: Key) -> &'static str {
    match key {
        // UI
        Key::UpdatedAt => "{$INTERPOLATION} 更新",
        Key::Name => "名前",
        Key::Total => "合計",
        Key::Subscribers => "登録者",
        Key::Views => "再生",
        Key::LastDay => "前日比",
        Key::Last7Days => "前週比",
        Key::Last30Days => "前月比",
        Key::YoutubeChannel => "YouTube チャンネル",
        Key::BilibiliChannel => "Bilibili チャンネル",
        Key::YoutubeStream => "YouTube 配信",
        Key::YoutubeSchedule => "YouTube 配信予定",
        Key::Settings => "設定",
        Key::ToggleDarkMode => "ダークモード切替",
        Key::AverageViewers => "平均同接",
        Key::MaximumViewers => "最大同接",
        Key::StreamHasEnded => "配信終了",
        Key::Streaming => "配信中",
        Key::StreamStartTime => "開始時刻",
        Key::StreamDuration => "配信時間",
        Key::YoutubeSubscribers => "YouTube 登録者",
        Key::BilibiliSubscribers => "Bilibili 登録者",
        Key::YoutubeViews => "YouTube 再生",
        Key::BilibiliViews => "Bilibili 再生",
        Key::VtuberSelected => "選択中の VTuber",
        Key::SelectLanguage => "言語を選択",
        Key::RecentStreams => "最近の配信",
        Key::StreamViewers => "配信同接",

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
