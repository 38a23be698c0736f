//! JIS互換漢字2面（JIS X 0213:2004 第2面）の符号表。
//!
//! 区点（0x21..=0x7E）から文字列への対応表。割り当てのない符号は空文字列。
//! 符号化文字数: 2436

// このファイルは自動生成されたものであり、手で編集しないこと。

pub(super) static JIS_KANJI_PLANE2: [[&str; 94]; 94] = [
    // 1区
    [
        "𠂉", "丂", "丏", "丒", "丩", "丫", "丮", "乀", "乇", "么", "𠂢", "乑",
        "㐆", "𠂤", "乚", "乩", "亝", "㐬", "㐮", "亹", "亻", "𠆢", "亼", "仃",
        "仈", "仐", "仫", "仚", "仱", "仵", "伀", "伖", "佤", "伷", "伾", "佔",
        "佘", "𠈓", "佷", "佸", "佺", "佽", "侂", "侅", "侒", "侚", "俦", "侲",
        "侾", "俅", "俋", "俏", "俒", "㑪", "俲", "倀", "倐", "倓", "倜", "倞",
        "倢", "㑨", "偂", "偆", "偎", "偓", "偗", "偣", "偦", "偪", "偰", "傣",
        "傈", "傒", "傓", "傕", "傖", "傜", "傪", "𠌫", "傱", "傺", "傻", "僄",
        "僇", "僳", "𠎁", "僎", "𠍱", "僔", "僙", "僡", "僩", "㒒",
    ],
    // 2区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 3区
    [
        "儈", "𠏹", "儗", "儛", "𠑊", "兠", "𠔉", "关", "冃", "冋", "㒼", "冘",
        "冣", "冭", "㓇", "冼", "𠗖", "𠘨", "凳", "凴", "刂", "划", "刖", "𠝏",
        "剕", "剜", "剬", "剷", "劄", "劂", "𠠇", "劘", "𠠺", "劤", "劦", "劯",
        "劺", "劻", "勊", "㔟", "勑", "𠢹", "勷", "匊", "匋", "匤", "匵", "匾",
        "卂", "𠥼", "𠦝", "卧", "卬", "卺", "厤", "厴", "𠫓", "厷", "叀", "𠬝",
        "㕝", "㕞", "叕", "叚", "㕣", "叴", "叵", "呕", "吤", "吨", "㕮", "呃",
        "呢", "呦", "呬", "咊", "咍", "咕", "咠", "咦", "咭", "咮", "咷", "咺",
        "咿", "哃", "𠵅", "哬", "哯", "哱", "哳", "唀", "唁", "唉",
    ],
    // 4区
    [
        "唼", "啁", "㖦", "啇", "啊", "㖨", "啠", "啡", "啤", "𠷡", "啽", "喂",
        "喈", "喑", "㗅", "嗒", "𠺕", "𠹭", "喿", "嗉", "嗌", "嗑", "嗝", "㗚",
        "嗢", "𠹤", "嗩", "嘨", "𠽟", "嘇", "嘐", "嘰", "嘷", "㗴", "嘽", "嘿",
        "噀", "噇", "噞", "噠", "噭", "㘅", "嚈", "嚌", "嚕", "嚚", "嚝", "嚨",
        "嚭", "嚲", "囅", "囍", "囟", "囨", "囶", "囷", "𡈁", "圕", "圣", "𡉕",
        "圩", "𡉻", "坅", "坆", "坌", "坍", "𡉴", "坨", "坯", "坳", "坴", "坵",
        "坻", "𡋤", "𡋗", "垬", "垚", "垝", "垞", "垨", "埗", "𡋽", "埌", "𡌶",
        "𡍄", "埞", "埦", "埰", "㙊", "埸", "埻", "埽", "堄", "堞",
    ],
    // 5区
    [
        "堠", "堧", "堲", "堹", "𡏄", "塉", "塌", "塧", "墊", "墋", "墍", "墏",
        "墐", "墔", "墝", "墪", "墱", "𡑭", "壃", "壍", "壢", "壳", "壴", "夅",
        "夆", "夋", "复", "夔", "夤", "𡗗", "㚑", "夽", "㚙", "奆", "㚖", "𦰩",
        "奛", "奟", "𡙇", "奵", "奶", "奼", "妟", "妮", "妼", "姈", "姍", "姞",
        "姣", "姤", "姧", "姮", "𡜆", "𡝂", "㛏", "娌", "娍", "娗", "娧", "娭",
        "婕", "婥", "婺", "媋", "媜", "媟", "媠", "媢", "媱", "媳", "媵", "媺",
        "媿", "嫚", "嫜", "嫠", "嫥", "嫰", "嫮", "嫵", "嬀", "嬈", "嬗", "嬴",
        "嬭", "孌", "孒", "孨", "孯", "孼", "孿", "宁", "宄", "𡧃",
    ],
    // 6区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 7区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 8区
    [
        "宖", "宬", "㝡", "寀", "㝢", "寎", "寖", "㝬", "㝫", "寱", "寽", "㝵",
        "尃", "尩", "尰", "𡱖", "屟", "屣", "屧", "屨", "屩", "屰", "𡴭", "𡵅",
        "屼", "𡵸", "𡵢", "岈", "岊", "㟁", "𡶡", "𡶜", "岠", "岢", "岦", "岧",
        "𡶒", "岭", "岵", "𡶷", "峉", "𡷠", "𡸳", "崆", "崐", "崫", "崝", "崠",
        "崤", "崦", "崱", "崹", "嵂", "㟨", "嵡", "嵪", "㟴", "嵰", "𡼞", "㟽",
        "嶈", "㠀", "嶒", "嶔", "嶗", "嶙", "嶰", "嶲", "嶴", "𡽶", "嶹", "巑",
        "巗", "巘", "巠", "𡿺", "巤", "巩", "㠯", "帀", "㠶", "帒", "帕", "㡀",
        "帟", "帮", "帾", "幉", "㡜", "幖", "㡡", "幫", "幬", "幭",
    ],
    // 9区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 10区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 11区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 12区
    [
        "幮", "𢅻", "庥", "庪", "庬", "庹", "庿", "廆", "廒", "廙", "𢌞", "廽",
        "弈", "弎", "弜", "𢎭", "弞", "彇", "彣", "彲", "彾", "徏", "徢", "徤",
        "徸", "忄", "㣺", "忇", "忋", "忒", "忓", "忔", "忢", "忮", "忯", "忳",
        "忼", "㤗", "怗", "怢", "怤", "㤚", "恌", "恿", "悊", "悕", "您", "𢛳",
        "悰", "悱", "悾", "惈", "惙", "惛", "惮", "惲", "惵", "愐", "愒", "愓",
        "愙", "愞", "愺", "㥯", "慁", "慆", "慠", "慼", "𢡛", "憒", "憓", "憗",
        "憘", "憥", "憨", "憭", "𢢫", "懕", "懝", "懟", "懵", "𢦏", "戕", "戣",
        "戩", "扆", "扌", "扑", "扒", "扡", "扤", "扻", "扭", "扳",
    ],
    // 13区
    [
        "抙", "抦", "拕", "𢪸", "拽", "挃", "挍", "挐", "𢭏", "𢭐", "挲", "挵",
        "挻", "挼", "捁", "捄", "捎", "𢭆", "捙", "𢰝", "𢮦", "捬", "掄", "掙",
        "𢰤", "掔", "掽", "揷", "揔", "揕", "揜", "揠", "揫", "揬", "揲", "搉",
        "搞", "搥", "搩", "搯", "摚", "摛", "摝", "摳", "摽", "撇", "撑", "撝",
        "撟", "擋", "擌", "擕", "擗", "𢷡", "擤", "擥", "擿", "攄", "㩮", "攏",
        "攔", "攖", "㩳", "攞", "攲", "敄", "敔", "敫", "敺", "斁", "斄", "斅",
        "斊", "斲", "斵", "斸", "斿", "旂", "旉", "旔", "㫖", "旲", "旹", "旼",
        "昄", "昈", "昡", "昪", "晅", "晑", "晎", "㫪", "𣇃", "晗",
    ],
    // 14区
    [
        "晛", "晣", "𣇵", "𣆶", "晪", "晫", "晬", "晭", "晻", "暀", "暐", "暒",
        "暙", "㬎", "暭", "暱", "暵", "㬚", "暿", "㬜", "曬", "㫗", "朁", "朅",
        "朒", "𣍲", "朙", "𣏓", "𣏒", "杌", "杍", "杔", "杝", "𣏐", "𣏤", "𣏕",
        "杴", "杶", "𣏚", "枒", "𣏟", "荣", "栐", "枰", "枲", "柃", "柈", "柒",
        "柙", "柛", "柰", "柷", "𣑊", "𣑑", "𣑋", "栘", "栟", "栭", "𣑥", "栳",
        "栻", "栾", "桄", "桅", "桉", "桌", "桕", "桗", "㭷", "桫", "桮", "桺",
        "桼", "梂", "梐", "梖", "㭭", "梘", "梙", "梚", "梜", "梪", "梫", "梴",
        "梻", "棻", "𣓤", "𣕚", "﨓", "棃", "棅", "棌", "棏", "棖",
    ],
    // 15区
    [
        "棙", "棤", "棥", "棬", "棷", "椃", "椇", "㮇", "㮈", "𣖔", "椻", "㮍",
        "楆", "楩", "楬", "楲", "楺", "楿", "榒", "㮤", "榖", "榘", "榦", "榰",
        "榷", "榺", "榼", "槀", "槑", "槖", "𣘹", "𣙇", "樰", "𣘸", "𣘺", "槣",
        "槮", "槯", "槳", "㯍", "槴", "槾", "樑", "樚", "樝", "𣜜", "樲", "樳",
        "樴", "樿", "橆", "橉", "橺", "橎", "橒", "橤", "𣜌", "橾", "檃", "檋",
        "㯰", "檑", "檟", "檡", "𣝤", "檫", "檽", "櫆", "櫔", "櫐", "櫜", "櫝",
        "𣟿", "𣟧", "櫬", "櫱", "櫲", "櫳", "櫽", "𣠤", "欋", "欏", "欐", "欑",
        "𣠽", "欗", "㰦", "欯", "歊", "歘", "歬", "歵", "歺", "殁",
    ],
    // 16区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 17区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 18区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 19区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 20区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 21区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 22区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 23区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 24区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 25区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 26区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 27区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 28区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 29区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 30区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 31区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 32区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 33区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 34区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 35区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 36区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 37区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 38区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 39区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 40区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 41区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 42区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 43区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 44区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 45区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 46区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 47区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 48区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 49区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 50区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 51区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 52区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 53区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 54区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 55区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 56区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 57区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 58区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 59区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 60区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 61区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 62区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 63区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 64区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 65区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 66区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 67区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 68区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 69区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 70区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 71区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 72区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 73区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 74区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 75区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 76区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 77区
    [
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "", "", "",
        "", "", "", "", "", "", "", "", "", "",
    ],
    // 78区
    [
        "殛", "殮", "𣪘", "殽", "殾", "毇", "毈", "毉", "毚", "毦", "毧", "毮",
        "毱", "氂", "氊", "氎", "氵", "氶", "氺", "𣱿", "氿", "汍", "汛", "汭",
        "沄", "沉", "㳃", "沔", "沕", "沗", "沭", "泂", "泐", "㳒", "泖", "泚",
        "泜", "泩", "泬", "泭", "𣴀", "洀", "洊", "洤", "洦", "洧", "汧", "洯",
        "洼", "浛", "浞", "浠", "浰", "涀", "涁", "涊", "涍", "涑", "涘", "𣵀",
        "渗", "𣷺", "𣷹", "𣷓", "涫", "涮", "涴", "淂", "洴", "淈", "淎", "淏",
        "淐", "淟", "淩", "淶", "渶", "渞", "渢", "渧", "㴑", "渲", "渼", "湈",
        "湉", "湋", "湌", "湏", "湑", "湓", "湔", "湗", "湣", "㴞",
    ],
    // 79区
    [
        "溓", "溧", "溴", "溿", "滃", "滊", "滙", "漵", "滫", "滹", "滻", "漊",
        "漌", "漘", "漥", "漶", "漼", "𣽾", "潒", "潗", "潚", "潠", "潨", "澘",
        "潽", "澐", "澖", "澾", "澟", "澥", "澯", "㵤", "澵", "濈", "濉", "濚",
        "濞", "濩", "𤂖", "濼", "瀀", "瀇", "瀊", "瀣", "𤄃", "瀹", "瀺", "瀼",
        "灃", "灇", "灋", "㶚", "灔", "灥", "灩", "灬", "灮", "灶", "灾", "炁",
        "炆", "炕", "炗", "炻", "𤇆", "炟", "炱", "𤇾", "烬", "烊", "烑", "烓",
        "烜", "焃", "焄", "焆", "焇", "焈", "焌", "㷀", "焯", "焱", "煐", "煊",
        "煓", "煞", "㷔", "熖", "熀", "熛", "熠", "熢", "熮", "熯",
    ],
    // 80区
    [
        "熳", "𤎼", "燋", "燓", "燙", "燜", "爇", "㸅", "爫", "爫", "爴", "爸",
        "爹", "丬", "牂", "牓", "牗", "牣", "𤘩", "牮", "牯", "牸", "牿", "犎",
        "𤚥", "犭", "犮", "犰", "犱", "狁", "㹠", "狌", "㹦", "㹨", "狳", "狺",
        "猇", "猒", "猘", "猙", "㺃", "猹", "猬", "猱", "猳", "猽", "獒", "㺔",
        "獫", "獬", "𤢖", "獮", "獯", "獱", "獷", "玁", "玅", "玊", "玔", "玘",
        "玜", "玞", "玥", "玨", "玵", "玷", "玹", "玼", "玿", "珅", "珋", "珡",
        "珧", "珹", "琓", "珺", "琁", "琤", "琱", "琹", "瑓", "瑀", "瑃", "瑍",
        "瑒", "瑝", "瑱", "璁", "璅", "璈", "𤩍", "璒", "璗", "璙",
    ],
    // 81区
    [
        "璠", "璡", "璥", "璪", "璫", "璹", "璻", "璺", "瓖", "瓘", "瓞", "瓯",
        "瓫", "𤭖", "瓺", "𤭯", "甠", "甤", "甪", "㽗", "𤰖", "甽", "甾", "畀",
        "畈", "畎", "畐", "畒", "畬", "畲", "畱", "畺", "畽", "畾", "疁", "𤴔",
        "疌", "㽵", "疢", "㽷", "疰", "疷", "疿", "痀", "痆", "痏", "痓", "痝",
        "痟", "痠", "痧", "痬", "痮", "痱", "痹", "瘃", "瘘", "瘇", "瘏", "㾮",
        "𤸎", "瘓", "瘛", "瘜", "𤸷", "瘥", "瘨", "瘼", "瘳", "𤹪", "㿉", "癁",
        "𤺋", "癉", "癕", "㿗", "癮", "皕", "皜", "皡", "皠", "皧", "皨", "皯",
        "𥁊", "盉", "𥁕", "盨", "盬", "𥄢", "眗", "眚", "眭", "眵",
    ],
    // 82区
    [
        "𥆩", "䀹", "𥇥", "𥇍", "睘", "睠", "睪", "𥈞", "睲", "睼", "睽", "𥉌",
        "䁘", "瞚", "瞟", "瞢", "瞤", "瞩", "矞", "矟", "矤", "矦", "矪", "矬",
        "䂓", "矰", "矴", "矻", "𥐮", "砅", "砆", "砉", "砍", "砙", "砡", "砬",
        "硇", "硤", "硪", "𥓙", "碊", "碔", "碤", "碝", "碞", "碟", "碻", "磈",
        "磌", "磎", "磕", "磠", "磡", "磦", "磹", "磺", "磻", "磾", "𥖧", "礐",
        "礛", "礰", "礥", "礻", "祊", "祘", "祛", "䄅", "祧", "祲", "禔", "禕",
        "禖", "禛", "禡", "禩", "禴", "离", "秂", "秇", "秌", "种", "秖", "䅈",
        "𥞩", "𥞴", "䅏", "稊", "稑", "稕", "稛", "稞", "䅣", "稭",
    ],
    // 83区
    [
        "稸", "穇", "穌", "穖", "穙", "穜", "穟", "穠", "穧", "穪", "穵", "穸",
        "窂", "窊", "窐", "窣", "窬", "𥧔", "䆴", "窹", "窼", "窾", "䆿", "竌",
        "竑", "竧", "竨", "竴", "𥫤", "𥫣", "笇", "𥫱", "笽", "笧", "笪", "笮",
        "笯", "笱", "䇦", "䇳", "筿", "筁", "䇮", "筕", "筹", "筤", "筦", "筩",
        "筳", "𥮲", "䈇", "箐", "箑", "箛", "䈎", "箯", "箵", "箼", "篅", "篊",
        "𥱋", "𥱤", "篔", "篖", "篚", "篪", "篰", "簃", "簋", "簎", "簏", "簦",
        "籅", "籊", "籑", "籗", "籞", "籡", "籩", "籮", "籯", "籰", "𥸮", "𥹖",
        "𥹥", "粦", "𥹢", "粶", "粷", "粿", "𥻘", "糄", "𥻂", "糈",
    ],
    // 84区
    [
        "糍", "𥻨", "糗", "𥼣", "糦", "糫", "𥽜", "糵", "紃", "紉", "䋆", "紒",
        "紞", "𥿠", "𥿔", "紽", "紾", "絀", "絇", "𦀌", "𥿻", "䋖", "絙", "絚",
        "絪", "絰", "䋝", "絿", "𦀗", "綆", "綈", "綌", "綗", "𦁠", "綝", "綧",
        "綪", "綶", "綷", "緀", "緗", "緙", "緦", "緱", "緹", "䌂", "𦃭", "縉",
        "縐", "縗", "縝", "縠", "縧", "縬", "繅", "繳", "繵", "繾", "纆", "纇",
        "䌫", "纑", "纘", "纚", "䍃", "缼", "缻", "缾", "罃", "罄", "罏", "㓁",
        "𦉰", "罒", "𦊆", "罡", "罣", "罤", "罭", "罽", "罾", "𦍌", "羐", "养",
        "𣴎", "羖", "羜", "羭", "𦐂", "翃", "翏", "翣", "翥", "翯",
    ],
    // 85区
    [
        "翲", "耂", "耊", "耈", "耎", "耑", "耖", "耤", "耬", "耰", "聃", "聦",
        "聱", "聵", "聻", "肙", "肜", "肤", "肧", "肸", "𦙾", "胅", "胕", "胘",
        "胦", "𦚰", "脍", "胵", "胻", "䏮", "脵", "脖", "脞", "䏰", "脤", "脧",
        "脬", "𦜝", "脽", "䐈", "腩", "䐗", "膁", "䐜", "膄", "膅", "䐢", "膘",
        "膲", "臁", "臃", "臖", "臛", "𦣝", "臤", "𦣪", "臬", "𦥑", "臽", "臿",
        "𦥯", "舄", "𦧝", "舙", "舡", "舢", "𦨞", "舲", "舴", "舼", "艆", "艉",
        "艅", "𦩘", "艋", "䑶", "艏", "䑺", "艗", "𦪌", "艜", "艣", "𦪷", "艹",
        "艹", "艹", "䒑", "艽", "艿", "芃", "芊", "芓", "芧", "芨",
    ],
    // 86区
    [
        "芲", "芴", "芺", "芼", "苢", "苨", "苷", "茇", "茈", "茌", "荔", "茛",
        "茝", "茰", "茼", "荄", "荗", "䒾", "荿", "䓔", "䒳", "莍", "莔", "莕",
        "莛", "莝", "菉", "菐", "菔", "菝", "菥", "菹", "萏", "萑", "萕", "𦱳",
        "萗", "萹", "葊", "葏", "葑", "葒", "葙", "葚", "葜", "𦳝", "葥", "葶",
        "葸", "葼", "蒁", "䔍", "蓜", "蒗", "蒦", "蒾", "䔈", "蓎", "蓏", "蓓",
        "𦹥", "蓧", "蓪", "蓯", "蓰", "蓱", "蓺", "蓽", "蔌", "蔛", "蔤", "蔥",
        "蔫", "蔴", "蕏", "蕯", "䔥", "䕃", "蔾", "蕑", "蕓", "蕞", "蕡", "蕢",
        "𦾔", "蕻", "蕽", "蕿", "薁", "薆", "薓", "薝", "薟", "𦿸",
    ],
    // 87区
    [
        "𦿶", "𦿷", "薷", "薼", "藇", "藊", "藘", "藙", "藟", "藡", "藦", "藶",
        "蘀", "蘑", "蘞", "蘡", "蘤", "蘧", "𧄍", "蘹", "蘼", "𧄹", "虀", "蘒",
        "虓", "虖", "虯", "虷", "虺", "蚇", "蚉", "蚍", "蚑", "蚜", "蚝", "蚨",
        "﨡", "蚱", "蚳", "蛁", "蛃", "蛑", "蛕", "蛗", "蛣", "蛦", "䖸", "蜅",
        "蜇", "蜎", "蜐", "蜓", "蜙", "蜟", "蜡", "蜣", "蜱", "蜺", "蜾", "蝀",
        "蝃", "蝑", "蝘", "蝤", "蝥", "蝲", "蝼", "𧏛", "𧏚", "螧", "螉", "螋",
        "螓", "螠", "𧏾", "䗥", "螾", "𧐐", "蟁", "蟎", "蟵", "蟟", "𧑉", "蟣",
        "蟥", "蟦", "蟪", "蟫", "蟭", "蠁", "蠃", "蠋", "蠓", "蠨",
    ],
    // 88区
    [
        "蠮", "蠲", "蠼", "䘏", "衊", "衘", "衟", "衤", "𧘕", "𧘔", "衩", "𧘱",
        "衯", "袠", "袼", "袽", "袾", "裀", "裒", "𧚓", "裑", "裓", "裛", "裰",
        "裱", "䙁", "褁", "𧜎", "褷", "𧜣", "襂", "襅", "襉", "𧝒", "䙥", "襢",
        "覀", "覉", "覐", "覟", "覰", "覷", "觖", "觘", "觫", "䚡", "觱", "觳",
        "觽", "觿", "䚯", "訑", "訔", "𧦅", "訡", "訵", "訾", "詅", "詍", "詘",
        "誮", "誐", "誷", "誾", "諗", "諼", "𧪄", "謊", "謅", "謍", "謜", "謟",
        "謭", "譃", "䜌", "譑", "譞", "譶", "譿", "讁", "讋", "讔", "讕", "讜",
        "讞", "谹", "𧮳", "谽", "𧮾", "𧯇", "豅", "豇", "豏", "豔",
    ],
    // 89区
    [
        "豗", "豩", "豭", "豳", "𧲸", "貓", "貒", "貙", "䝤", "貛", "貤", "賖",
        "賕", "賙", "𧶠", "賰", "賱", "𧸐", "贉", "贎", "赬", "趄", "趕", "趦",
        "𧾷", "跆", "跈", "跙", "跬", "踌", "䟽", "跽", "踆", "𨂊", "踔", "踖",
        "踡", "踢", "踧", "𨂻", "䠖", "踶", "踹", "蹋", "蹔", "蹢", "蹬", "蹭",
        "蹯", "躘", "躞", "躮", "躳", "躵", "躶", "躻", "𨊂", "軑", "軔", "䡎",
        "軹", "𨋳", "輀", "輈", "輗", "輫", "轀", "轊", "轘", "𨐌", "辤", "辴",
        "辶", "辶", "𨑕", "迁", "迆", "﨤", "迊", "迍", "迓", "迕", "迠", "迱",
        "迵", "迻", "适", "逌", "逷", "𨕫", "遃", "遄", "遝", "𨗈",
    ],
    // 90区
    [
        "𨗉", "邅", "邌", "邐", "阝", "邡", "䢵", "邰", "邶", "郃", "郈", "𨛗",
        "郜", "郟", "𨛺", "郶", "郲", "鄀", "郫", "郾", "郿", "鄄", "鄆", "鄘",
        "鄜", "鄞", "鄷", "鄹", "鄺", "酆", "酇", "酗", "酙", "酡", "酤", "酴",
        "酹", "醅", "醎", "醨", "醮", "醳", "醶", "釃", "釄", "釚", "𨥉", "𨥆",
        "釬", "釮", "鈁", "鈊", "鈖", "鈗", "𨥫", "鈳", "鉂", "鉇", "鉊", "鉎",
        "鉑", "鉖", "鉙", "鉠", "鉡", "鉥", "鉧", "鉨", "𨦇", "𨦈", "鉼", "鉽",
        "鉿", "銉", "銍", "銗", "銙", "銟", "銧", "銫", "𨦺", "𨦻", "銲", "銿",
        "鋀", "鋆", "鋎", "鋐", "鋗", "鋙", "鋥", "鋧", "錑", "𨨞",
    ],
    // 91区
    [
        "𨨩", "鋷", "鋹", "鋻", "錂", "錍", "錕", "錝", "錞", "錧", "錩", "𨩱",
        "𨩃", "鍇", "鍑", "鍗", "鍚", "鍫", "鍱", "鍳", "鎡", "𨪙", "𨫍", "鎈",
        "鎋", "鎏", "鎞", "鏵", "𨫤", "𨫝", "鏱", "鏁", "鏇", "鏜", "鏢", "鏧",
        "鐉", "鐏", "鐖", "鐗", "鏻", "鐲", "鐴", "鐻", "鑅", "𨯁", "𨯯", "鑭",
        "鑯", "镸", "镹", "閆", "閌", "閍", "𨴐", "閫", "閴", "𨵱", "闈", "𨷻",
        "𨸟", "阬", "阳", "阴", "𨸶", "阼", "陁", "陡", "𨺉", "隂", "𨻫", "隚",
        "𨼲", "䧧", "隩", "隯", "隳", "隺", "隽", "䧺", "𨿸", "雘", "雚", "雝",
        "䨄", "霔", "霣", "䨩", "霶", "靁", "靇", "靕", "靗", "靛",
    ],
    // 92区
    [
        "靪", "𩊠", "𩊱", "鞖", "鞚", "鞞", "鞢", "鞱", "鞲", "鞾", "韌", "韑",
        "韔", "韘", "韙", "韡", "韱", "頄", "頍", "頎", "頔", "頖", "䪼", "𩒐",
        "頣", "頲", "頳", "頥", "顇", "顦", "颫", "颭", "颰", "𩗏", "颷", "颸",
        "颻", "颼", "颿", "飂", "飇", "飋", "飠", "𩙿", "飡", "飣", "飥", "飪",
        "飰", "飱", "飳", "餈", "䬻", "𩛰", "餖", "餗", "𩜙", "餚", "餛", "餜",
        "𩝐", "餱", "餲", "餳", "餺", "餻", "餼", "饀", "饁", "饆", "饍", "饎",
        "饜", "饟", "饠", "馣", "馦", "馹", "馽", "馿", "駃", "駉", "駔", "駙",
        "駞", "𩣆", "駰", "駹", "駼", "騊", "騑", "騖", "騚", "騠",
    ],
    // 93区
    [
        "騱", "騶", "驄", "驌", "驘", "䯂", "骯", "䯊", "骷", "䯒", "骹", "𩩲",
        "髆", "髐", "髒", "髕", "䯨", "髜", "髠", "髥", "髩", "鬃", "鬌", "鬐",
        "鬒", "鬖", "鬜", "鬫", "鬳", "鬽", "䰠", "魋", "魣", "魥", "魫", "魬",
        "魳", "魶", "魷", "鮦", "鮬", "鮱", "𩷛", "𩸽", "鮲", "鮸", "鮾", "鯇",
        "鯳", "鯘", "鯝", "鯧", "鯪", "鯫", "鯯", "鯮", "𩸕", "鯺", "𩺊", "鯷",
        "𩹉", "鰖", "鰘", "鰙", "鰚", "鰝", "鰢", "鰧", "鰩", "鰪", "𩻄", "鰱",
        "鰶", "鰷", "鱅", "鱜", "𩻩", "鱉", "鱊", "𩻛", "鱔", "鱘", "鱛", "鱝",
        "鱟", "鱩", "鱪", "鱫", "鱭", "鱮", "鱰", "鱲", "鱵", "鱺",
    ],
    // 94区
    [
        "鳦", "鳲", "鴋", "鴂", "𩿎", "鴑", "鴗", "鴘", "𪀯", "䳄", "𪀚", "鴲",
        "䳑", "鵂", "鵊", "鵟", "鵢", "𪃹", "鵩", "鵫", "𪂂", "鵳", "鵶", "鵷",
        "鵾", "鶄", "鶍", "鶙", "鶡", "鶿", "鶵", "鶹", "鶽", "鷃", "鷇", "鷉",
        "鷖", "鷚", "鷟", "鷠", "鷣", "鷴", "䴇", "鸊", "鸂", "鸍", "鸙", "鸜",
        "鸝", "鹻", "𢈘", "麀", "麅", "麛", "麨", "𪎌", "麽", "𪐷", "黟", "黧",
        "黮", "黿", "鼂", "䵷", "鼃", "鼗", "鼙", "鼯", "鼷", "鼺", "鼽", "齁",
        "齅", "齆", "齓", "齕", "齘", "𪗱", "齝", "𪘂", "齩", "𪘚", "齭", "齰",
        "齵", "𪚲", "", "", "", "", "", "", "", "",
    ],
];
