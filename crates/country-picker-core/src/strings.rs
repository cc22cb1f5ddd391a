// crates/country-picker-core/src/strings.rs

//! Localized UI strings for the picker chrome (placeholder, header,
//! search box, empty state). Pure data; hosts can always supply their
//! own strings and ignore this table.

use crate::locale::LocaleTag;

/// The fixed set of UI strings a picker host needs, localized.
#[derive(Clone, Copy, Debug)]
pub struct LocaleStrings {
    pub placeholder: &'static str,
    pub header_title: &'static str,
    pub search_placeholder: &'static str,
    pub empty_list_text: &'static str,
    pub close_button_text: &'static str,
    pub calling_code_placeholder: &'static str,
    pub calling_code_header_title: &'static str,
}

impl LocaleStrings {
    /// Strings for `locale`. Total over the supported set.
    pub fn for_locale(locale: LocaleTag) -> &'static LocaleStrings {
        match locale {
            LocaleTag::En => &EN,
            LocaleTag::Da => &DA,
            LocaleTag::Ru => &RU,
            LocaleTag::Pl => &PL,
            LocaleTag::Ua => &UA,
            LocaleTag::Cz => &CZ,
            LocaleTag::By => &BY,
            LocaleTag::Pt => &PT,
            LocaleTag::Es => &ES,
            LocaleTag::Ro => &RO,
            LocaleTag::Bg => &BG,
            LocaleTag::De => &DE,
            LocaleTag::Fr => &FR,
            LocaleTag::Nl => &NL,
            LocaleTag::It => &IT,
            LocaleTag::Cn => &CN,
            LocaleTag::Zh => &ZH,
            LocaleTag::Ko => &KO,
            LocaleTag::Ee => &EE,
            LocaleTag::Jp => &JP,
            LocaleTag::He => &HE,
            LocaleTag::El => &EL,
            LocaleTag::Ar => &AR,
            LocaleTag::Tr => &TR,
            LocaleTag::Hu => &HU,
        }
    }
}

static EN: LocaleStrings = LocaleStrings {
    placeholder: "Select a country",
    header_title: "Select Country",
    search_placeholder: "Search countries...",
    empty_list_text: "No countries found",
    close_button_text: "Done",
    calling_code_placeholder: "Code",
    calling_code_header_title: "Select Country Code",
};

static DA: LocaleStrings = LocaleStrings {
    placeholder: "Vælg et land",
    header_title: "Vælg land",
    search_placeholder: "Søg lande...",
    empty_list_text: "Ingen lande fundet",
    close_button_text: "Færdig",
    calling_code_placeholder: "Kode",
    calling_code_header_title: "Vælg landekode",
};

static RU: LocaleStrings = LocaleStrings {
    placeholder: "Выберите страну",
    header_title: "Выберите страну",
    search_placeholder: "Поиск стран...",
    empty_list_text: "Страны не найдены",
    close_button_text: "Готово",
    calling_code_placeholder: "Код",
    calling_code_header_title: "Выберите код страны",
};

static PL: LocaleStrings = LocaleStrings {
    placeholder: "Wybierz kraj",
    header_title: "Wybierz kraj",
    search_placeholder: "Szukaj krajów...",
    empty_list_text: "Nie znaleziono krajów",
    close_button_text: "Gotowe",
    calling_code_placeholder: "Kod",
    calling_code_header_title: "Wybierz kod kraju",
};

static UA: LocaleStrings = LocaleStrings {
    placeholder: "Виберіть країну",
    header_title: "Виберіть країну",
    search_placeholder: "Шукати країни...",
    empty_list_text: "Країни не знайдено",
    close_button_text: "Готово",
    calling_code_placeholder: "Код",
    calling_code_header_title: "Виберіть код країни",
};

static CZ: LocaleStrings = LocaleStrings {
    placeholder: "Vyberte zemi",
    header_title: "Vyberte zemi",
    search_placeholder: "Hledat země...",
    empty_list_text: "Žádné země nenalezeny",
    close_button_text: "Hotovo",
    calling_code_placeholder: "Kód",
    calling_code_header_title: "Vyberte předvolbu země",
};

static BY: LocaleStrings = LocaleStrings {
    placeholder: "Выберыце краіну",
    header_title: "Выберыце краіну",
    search_placeholder: "Шукаць краіны...",
    empty_list_text: "Краіны не знойдзены",
    close_button_text: "Гатова",
    calling_code_placeholder: "Код",
    calling_code_header_title: "Выберыце код краіны",
};

static PT: LocaleStrings = LocaleStrings {
    placeholder: "Selecionar um país",
    header_title: "Selecionar país",
    search_placeholder: "Pesquisar países...",
    empty_list_text: "Nenhum país encontrado",
    close_button_text: "Concluído",
    calling_code_placeholder: "Código",
    calling_code_header_title: "Selecionar código do país",
};

static ES: LocaleStrings = LocaleStrings {
    placeholder: "Seleccionar un país",
    header_title: "Seleccionar país",
    search_placeholder: "Buscar países...",
    empty_list_text: "No se encontraron países",
    close_button_text: "Listo",
    calling_code_placeholder: "Código",
    calling_code_header_title: "Seleccionar código de país",
};

static RO: LocaleStrings = LocaleStrings {
    placeholder: "Selectați o țară",
    header_title: "Selectați țara",
    search_placeholder: "Căutați țări...",
    empty_list_text: "Nu s-au găsit țări",
    close_button_text: "Gata",
    calling_code_placeholder: "Cod",
    calling_code_header_title: "Selectați codul țării",
};

static BG: LocaleStrings = LocaleStrings {
    placeholder: "Изберете държава",
    header_title: "Изберете държава",
    search_placeholder: "Търсене на държави...",
    empty_list_text: "Няма намерени държави",
    close_button_text: "Готово",
    calling_code_placeholder: "Код",
    calling_code_header_title: "Изберете код на държава",
};

static DE: LocaleStrings = LocaleStrings {
    placeholder: "Land auswählen",
    header_title: "Land auswählen",
    search_placeholder: "Länder suchen...",
    empty_list_text: "Keine Länder gefunden",
    close_button_text: "Fertig",
    calling_code_placeholder: "Code",
    calling_code_header_title: "Landesvorwahl auswählen",
};

static FR: LocaleStrings = LocaleStrings {
    placeholder: "Sélectionner un pays",
    header_title: "Sélectionner un pays",
    search_placeholder: "Rechercher des pays...",
    empty_list_text: "Aucun pays trouvé",
    close_button_text: "Terminé",
    calling_code_placeholder: "Code",
    calling_code_header_title: "Sélectionner l'indicatif",
};

static NL: LocaleStrings = LocaleStrings {
    placeholder: "Selecteer een land",
    header_title: "Selecteer land",
    search_placeholder: "Landen zoeken...",
    empty_list_text: "Geen landen gevonden",
    close_button_text: "Klaar",
    calling_code_placeholder: "Code",
    calling_code_header_title: "Selecteer landcode",
};

static IT: LocaleStrings = LocaleStrings {
    placeholder: "Seleziona un paese",
    header_title: "Seleziona paese",
    search_placeholder: "Cerca paesi...",
    empty_list_text: "Nessun paese trovato",
    close_button_text: "Fatto",
    calling_code_placeholder: "Codice",
    calling_code_header_title: "Seleziona prefisso",
};

static CN: LocaleStrings = LocaleStrings {
    placeholder: "选择国家",
    header_title: "选择国家",
    search_placeholder: "搜索国家...",
    empty_list_text: "未找到国家",
    close_button_text: "完成",
    calling_code_placeholder: "区号",
    calling_code_header_title: "选择国家区号",
};

static ZH: LocaleStrings = LocaleStrings {
    placeholder: "選擇國家",
    header_title: "選擇國家",
    search_placeholder: "搜尋國家...",
    empty_list_text: "未找到國家",
    close_button_text: "完成",
    calling_code_placeholder: "區號",
    calling_code_header_title: "選擇國家區號",
};

static KO: LocaleStrings = LocaleStrings {
    placeholder: "국가 선택",
    header_title: "국가 선택",
    search_placeholder: "국가 검색...",
    empty_list_text: "국가를 찾을 수 없습니다",
    close_button_text: "완료",
    calling_code_placeholder: "코드",
    calling_code_header_title: "국가 코드 선택",
};

static EE: LocaleStrings = LocaleStrings {
    placeholder: "Vali riik",
    header_title: "Vali riik",
    search_placeholder: "Otsi riike...",
    empty_list_text: "Riike ei leitud",
    close_button_text: "Valmis",
    calling_code_placeholder: "Kood",
    calling_code_header_title: "Vali riigi kood",
};

static JP: LocaleStrings = LocaleStrings {
    placeholder: "国を選択",
    header_title: "国を選択",
    search_placeholder: "国を検索...",
    empty_list_text: "国が見つかりません",
    close_button_text: "完了",
    calling_code_placeholder: "コード",
    calling_code_header_title: "国コードを選択",
};

static HE: LocaleStrings = LocaleStrings {
    placeholder: "בחר מדינה",
    header_title: "בחר מדינה",
    search_placeholder: "חפש מדינות...",
    empty_list_text: "לא נמצאו מדינות",
    close_button_text: "סיום",
    calling_code_placeholder: "קוד",
    calling_code_header_title: "בחר קוד מדינה",
};

static EL: LocaleStrings = LocaleStrings {
    placeholder: "Επιλέξτε χώρα",
    header_title: "Επιλέξτε χώρα",
    search_placeholder: "Αναζήτηση χωρών...",
    empty_list_text: "Δεν βρέθηκαν χώρες",
    close_button_text: "Τέλος",
    calling_code_placeholder: "Κωδικός",
    calling_code_header_title: "Επιλέξτε κωδικό χώρας",
};

static AR: LocaleStrings = LocaleStrings {
    placeholder: "اختر دولة",
    header_title: "اختر دولة",
    search_placeholder: "البحث عن الدول...",
    empty_list_text: "لم يتم العثور على دول",
    close_button_text: "تم",
    calling_code_placeholder: "الرمز",
    calling_code_header_title: "اختر رمز الدولة",
};

static TR: LocaleStrings = LocaleStrings {
    placeholder: "Ülke seçin",
    header_title: "Ülke seçin",
    search_placeholder: "Ülke ara...",
    empty_list_text: "Ülke bulunamadı",
    close_button_text: "Tamam",
    calling_code_placeholder: "Kod",
    calling_code_header_title: "Ülke kodu seçin",
};

static HU: LocaleStrings = LocaleStrings {
    placeholder: "Válasszon országot",
    header_title: "Válasszon országot",
    search_placeholder: "Országok keresése...",
    empty_list_text: "Nem található ország",
    close_button_text: "Kész",
    calling_code_placeholder: "Kód",
    calling_code_header_title: "Válasszon országkódot",
};
