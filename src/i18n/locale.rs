/// 界面语言枚举
///
/// 同时决定界面文字和发送给 LLM 的提示词语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Locale {
    /// 英语
    #[default]
    English,
    /// 德语
    German,
    /// 土耳其语
    Turkish,
}

/// 语言别名表（全部小写）
static LOCALE_ALIASES: phf::Map<&'static str, Locale> = phf::phf_map! {
    "english" => Locale::English,
    "en" => Locale::English,
    "german" => Locale::German,
    "deutsch" => Locale::German,
    "de" => Locale::German,
    "turkish" => Locale::Turkish,
    "türkçe" => Locale::Turkish,
    "turkce" => Locale::Turkish,
    "tr" => Locale::Turkish,
};

impl Locale {
    /// 全部可选语言（按界面显示顺序）
    pub const ALL: [Locale; 3] = [Locale::English, Locale::German, Locale::Turkish];

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::German => "German",
            Locale::Turkish => "Turkish",
        }
    }

    /// 获取 ISO 639-1 代码
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::German => "de",
            Locale::Turkish => "tr",
        }
    }

    /// 从名称或代码解析语言（忽略大小写）
    pub fn find(s: &str) -> Option<Self> {
        LOCALE_ALIASES.get(s.trim().to_lowercase().as_str()).copied()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_name_and_code() {
        assert_eq!(Locale::find("English"), Some(Locale::English));
        assert_eq!(Locale::find(" DE "), Some(Locale::German));
        assert_eq!(Locale::find("Deutsch"), Some(Locale::German));
        assert_eq!(Locale::find("tr"), Some(Locale::Turkish));
        assert_eq!(Locale::find("klingon"), None);
    }

    #[test]
    fn test_every_locale_round_trips_through_its_name() {
        for locale in Locale::ALL {
            assert_eq!(Locale::find(locale.name()), Some(locale));
            assert_eq!(Locale::find(locale.code()), Some(locale));
        }
    }
}
