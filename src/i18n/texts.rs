//! 界面文字与提示词模板
//!
//! 每种语言一张静态表，启动时按 [`Locale`] 解析一次

use super::Locale;

/// 单一语言的全部界面文字
#[derive(Debug)]
pub struct LocaleTexts {
    pub how_it_works: &'static str,
    pub api_key_prompt: &'static str,
    pub upload_prompt: &'static str,
    pub download_sample: &'static str,
    pub sample_saved: &'static str,
    pub sample_missing: &'static str,
    pub num_faqs_prompt: &'static str,
    pub model_prompt: &'static str,
    pub generate_button: &'static str,
    pub error_message: &'static str,
    /// 占位符 `{ceiling}`
    pub limit_error: &'static str,
    /// 占位符 `{min}` `{max}`
    pub range_error: &'static str,
    pub generating_topic: &'static str,
    pub generation_done: &'static str,
    pub no_faqs: &'static str,
    pub review_faqs: &'static str,
    pub download_faqs: &'static str,
    pub faqs_saved: &'static str,
    pub save_path_prompt: &'static str,
    pub wp_settings: &'static str,
    pub wp_url_prompt: &'static str,
    pub wp_user_prompt: &'static str,
    pub wp_password_prompt: &'static str,
    pub wp_missing_fields: &'static str,
    pub post_type_prompt: &'static str,
    pub custom_post_type_prompt: &'static str,
    pub check_wp_button: &'static str,
    pub check_wp_success: &'static str,
    pub check_wp_failure: &'static str,
    pub upload_wp_button: &'static str,
    pub upload_success: &'static str,
    pub upload_failure: &'static str,
    pub already_published: &'static str,
    pub not_verified: &'static str,
    pub change_language: &'static str,
    pub menu_prompt: &'static str,
    pub quit: &'static str,
}

static ENGLISH: LocaleTexts = LocaleTexts {
    how_it_works: "\
## How it works
1. Enter your OpenAI API key.
2. Download the sample CSV file and expand the services under **Service**.
3. Upload your saved CSV file.
4. Choose how many FAQs you want to generate.
5. Select the model you want to use.
6. Click **Generate**.
7. After generation is complete, you can download the file.
8. Enter your WordPress Application Password and upload the FAQs directly to your WordPress site.",
    api_key_prompt: "Enter your OpenAI API key:",
    upload_prompt: "Choose a CSV file",
    download_sample: "Download sample CSV",
    sample_saved: "Sample CSV saved to",
    sample_missing: "Sample CSV file not found. Please ensure 'sample.csv' is in the correct directory.",
    num_faqs_prompt: "Number of FAQs to generate per topic:",
    model_prompt: "Select the model to use:",
    generate_button: "Generate FAQs",
    error_message: "Please provide your OpenAI API key and upload a CSV file.",
    limit_error: "The free version only allows up to {ceiling} FAQs per topic.",
    range_error: "Please choose a number between {min} and {max}.",
    generating_topic: "Generating FAQs for",
    generation_done: "FAQ generation finished.",
    no_faqs: "No FAQs have been generated yet.",
    review_faqs: "Show generated FAQs",
    download_faqs: "Download FAQs as CSV",
    faqs_saved: "FAQs saved to",
    save_path_prompt: "Save to file:",
    wp_settings: "### WordPress Settings",
    wp_url_prompt: "Enter your WordPress site URL:",
    wp_user_prompt: "Enter your WordPress username:",
    wp_password_prompt: "Enter your WordPress application password:",
    wp_missing_fields: "Please provide your WordPress site URL, username, and application password.",
    post_type_prompt: "Select the type of post to create:",
    custom_post_type_prompt: "Enter the REST base of your custom post type:",
    check_wp_button: "Check WordPress Connection",
    check_wp_success: "Successfully connected to WordPress and created a test draft post!",
    check_wp_failure: "Failed to connect to WordPress.",
    upload_wp_button: "Upload FAQs to WordPress",
    upload_success: "FAQs successfully uploaded to WordPress!",
    upload_failure: "Failed to upload FAQs to WordPress. Please check your credentials and try again.",
    already_published: "These FAQs were already uploaded to this site. Generate new FAQs to upload again.",
    not_verified: "Please check the WordPress connection first.",
    change_language: "Select Language / Sprache / Dil Seçin:",
    menu_prompt: "What would you like to do?",
    quit: "Quit",
};

static GERMAN: LocaleTexts = LocaleTexts {
    how_it_works: "\
## Wie es funktioniert
1. Geben Sie Ihren OpenAI API-Schlüssel ein.
2. Laden Sie die Beispiel-CSV-Datei herunter und erweitern Sie die Dienstleistungen unter **Leistungen**.
3. Laden Sie Ihre gespeicherte CSV-Datei wieder hoch.
4. Wählen Sie, wie viele FAQs Sie generieren möchten.
5. Wählen Sie das Modell, das Sie verwenden möchten.
6. Klicken Sie auf **Generieren**.
7. Nach Abschluss der Generierung können Sie die Datei herunterladen.
8. Geben Sie Ihr WordPress-Anwendungspasswort ein und laden Sie die FAQs direkt auf Ihre WordPress-Seite hoch.",
    api_key_prompt: "Geben Sie Ihren OpenAI API-Schlüssel ein:",
    upload_prompt: "Wählen Sie eine CSV-Datei",
    download_sample: "Beispiel-CSV herunterladen",
    sample_saved: "Beispiel-CSV gespeichert unter",
    sample_missing: "Beispiel-CSV-Datei nicht gefunden. Bitte stellen Sie sicher, dass sich 'sample.csv' im richtigen Verzeichnis befindet.",
    num_faqs_prompt: "Anzahl der FAQs, die pro Thema generiert werden sollen:",
    model_prompt: "Wählen Sie das zu verwendende Modell:",
    generate_button: "FAQs generieren",
    error_message: "Bitte geben Sie Ihren OpenAI API-Schlüssel ein und laden Sie eine CSV-Datei hoch.",
    limit_error: "Die kostenlose Version erlaubt nur bis zu {ceiling} FAQs pro Thema.",
    range_error: "Bitte wählen Sie eine Zahl zwischen {min} und {max}.",
    generating_topic: "FAQs werden erstellt für",
    generation_done: "FAQ-Generierung abgeschlossen.",
    no_faqs: "Es wurden noch keine FAQs generiert.",
    review_faqs: "Generierte FAQs anzeigen",
    download_faqs: "FAQs als CSV herunterladen",
    faqs_saved: "FAQs gespeichert unter",
    save_path_prompt: "Speichern unter:",
    wp_settings: "### WordPress-Einstellungen",
    wp_url_prompt: "Geben Sie Ihre WordPress-Site-URL ein:",
    wp_user_prompt: "Geben Sie Ihren WordPress-Benutzernamen ein:",
    wp_password_prompt: "Geben Sie Ihr WordPress-Anwendungspasswort ein:",
    wp_missing_fields: "Bitte geben Sie Ihre WordPress-Site-URL, Ihren Benutzernamen und Ihr Anwendungspasswort ein.",
    post_type_prompt: "Wählen Sie die Art des zu erstellenden Beitrags:",
    custom_post_type_prompt: "Geben Sie die REST-Basis Ihres benutzerdefinierten Beitragstyps ein:",
    check_wp_button: "WordPress-Verbindung prüfen",
    check_wp_success: "Erfolgreich mit WordPress verbunden und einen Testentwurf erstellt!",
    check_wp_failure: "Verbindung zu WordPress fehlgeschlagen.",
    upload_wp_button: "FAQs zu WordPress hochladen",
    upload_success: "FAQs erfolgreich zu WordPress hochgeladen!",
    upload_failure: "Hochladen der FAQs zu WordPress fehlgeschlagen. Bitte überprüfen Sie Ihre Anmeldeinformationen und versuchen Sie es erneut.",
    already_published: "Diese FAQs wurden bereits auf diese Seite hochgeladen. Generieren Sie neue FAQs, um erneut hochzuladen.",
    not_verified: "Bitte prüfen Sie zuerst die WordPress-Verbindung.",
    change_language: "Select Language / Sprache / Dil Seçin:",
    menu_prompt: "Was möchten Sie tun?",
    quit: "Beenden",
};

static TURKISH: LocaleTexts = LocaleTexts {
    how_it_works: "\
## Nasıl çalışır
1. OpenAI API anahtarınızı girin.
2. Örnek CSV dosyasını indirin ve **Hizmet** altında hizmetleri genişletin.
3. Kaydedilmiş CSV dosyanızı yükleyin.
4. Kaç adet SSS oluşturmak istediğinizi seçin.
5. Kullanmak istediğiniz modeli seçin.
6. **Oluştur** düğmesine tıklayın.
7. Oluşturma tamamlandıktan sonra dosyayı indirebilirsiniz.
8. WordPress Uygulama Parolanızı girin ve SSS'leri doğrudan WordPress sitenize yükleyin.",
    api_key_prompt: "OpenAI API anahtarınızı girin:",
    upload_prompt: "Bir CSV dosyası seçin",
    download_sample: "Örnek CSV indir",
    sample_saved: "Örnek CSV kaydedildi:",
    sample_missing: "Örnek CSV dosyası bulunamadı. Lütfen 'sample.csv' dosyasının doğru dizinde olduğundan emin olun.",
    num_faqs_prompt: "Konu başına oluşturulacak SSS sayısı:",
    model_prompt: "Kullanılacak modeli seçin:",
    generate_button: "SSS Oluştur",
    error_message: "Lütfen OpenAI API anahtarınızı girin ve bir CSV dosyası yükleyin.",
    limit_error: "Ücretsiz sürüm, konu başına en fazla {ceiling} SSS oluşturmaya izin verir.",
    range_error: "Lütfen {min} ile {max} arasında bir sayı seçin.",
    generating_topic: "SSS oluşturuluyor:",
    generation_done: "SSS oluşturma tamamlandı.",
    no_faqs: "Henüz SSS oluşturulmadı.",
    review_faqs: "Oluşturulan SSS'leri göster",
    download_faqs: "SSS'leri CSV olarak indir",
    faqs_saved: "SSS'ler kaydedildi:",
    save_path_prompt: "Kaydedilecek dosya:",
    wp_settings: "### WordPress Ayarları",
    wp_url_prompt: "WordPress site URL'inizi girin:",
    wp_user_prompt: "WordPress kullanıcı adınızı girin:",
    wp_password_prompt: "WordPress uygulama parolanızı girin:",
    wp_missing_fields: "Lütfen WordPress site URL'nizi, kullanıcı adınızı ve uygulama parolanızı girin.",
    post_type_prompt: "Oluşturulacak gönderi türünü seçin:",
    custom_post_type_prompt: "Özel gönderi türünüzün REST tabanını girin:",
    check_wp_button: "WordPress Bağlantısını Kontrol Et",
    check_wp_success: "WordPress'e başarıyla bağlanıldı ve bir test taslağı oluşturuldu!",
    check_wp_failure: "WordPress'e bağlanılamadı.",
    upload_wp_button: "SSS'leri WordPress'e yükleyin",
    upload_success: "SSS'ler başarıyla WordPress'e yüklendi!",
    upload_failure: "SSS'leri WordPress'e yükleme başarısız oldu. Lütfen kimlik bilgilerinizi kontrol edin ve tekrar deneyin.",
    already_published: "Bu SSS'ler bu siteye zaten yüklendi. Tekrar yüklemek için yeni SSS oluşturun.",
    not_verified: "Lütfen önce WordPress bağlantısını kontrol edin.",
    change_language: "Select Language / Sprache / Dil Seçin:",
    menu_prompt: "Ne yapmak istersiniz?",
    quit: "Çıkış",
};

/// 获取指定语言的界面文字
pub fn texts(locale: Locale) -> &'static LocaleTexts {
    match locale {
        Locale::English => &ENGLISH,
        Locale::German => &GERMAN,
        Locale::Turkish => &TURKISH,
    }
}

impl LocaleTexts {
    /// 免费额度提示
    pub fn limit_message(&self, ceiling: usize) -> String {
        self.limit_error.replace("{ceiling}", &ceiling.to_string())
    }

    /// 数量范围提示
    pub fn range_message(&self, min: usize, max: usize) -> String {
        self.range_error
            .replace("{min}", &min.to_string())
            .replace("{max}", &max.to_string())
    }
}

/// 构建"生成问题"的提示词
pub fn question_prompt(locale: Locale, count: usize, topic: &str) -> String {
    match locale {
        Locale::English => format!(
            "Generate {count} FAQs (questions only) in English for the topic {topic}. No introduction, only the questions."
        ),
        Locale::German => format!(
            "Erstelle direkt {count} FAQs (nur die Fragen) auf Deutsch zu dem Thema {topic}. Keine Einleitung, nur die Fragen."
        ),
        Locale::Turkish => format!(
            "{count} adet ve {topic} konusuyla ilgili olarak Türkçe dilinde Soru oluşturun. Giriş yok, sadece sorular."
        ),
    }
}

/// 构建"生成回答"的提示词
pub fn answer_prompt(locale: Locale, topic: &str, question: &str) -> String {
    match locale {
        Locale::English => format!(
            "Create a comprehensive answer in English for the following question on the topic {topic}: {question}. \
             Use Markdown and HTML formatting to improve readability. \
             The answer should be at least 4-5 sentences long. No introduction, only the answer."
        ),
        Locale::German => format!(
            "Erstelle direkt eine umfassende Antwort auf Deutsch für die folgende Frage zum Thema {topic}: {question}. \
             Verwende Markdown und HTML-Formatierungen, um die Lesbarkeit zu verbessern. \
             Die Antwort sollte mindestens 4-5 Sätze lang sein. Keine Einleitung, nur die Antwort."
        ),
        Locale::Turkish => format!(
            "Aşağıdaki soruya Türkçe dilinde {topic} konusuyla ilgili olarak kapsamlı bir cevap oluşturun: {question}. \
             Okunabilirliği artırmak için Markdown ve HTML biçimlendirmelerini kullanın. \
             Cevap en az 4-5 cümle uzunluğunda olmalıdır. Giriş yok, sadece cevap."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_mentions_count_and_topic() {
        for locale in Locale::ALL {
            let prompt = question_prompt(locale, 4, "Dachreinigung");
            assert!(prompt.contains('4'), "{locale}: {prompt}");
            assert!(prompt.contains("Dachreinigung"), "{locale}: {prompt}");
        }
    }

    #[test]
    fn test_answer_prompt_mentions_topic_and_question() {
        for locale in Locale::ALL {
            let prompt = answer_prompt(locale, "Solar", "Was kostet eine Anlage?");
            assert!(prompt.contains("Solar"));
            assert!(prompt.contains("Was kostet eine Anlage?"));
            assert!(prompt.contains("4-5"));
        }
    }

    #[test]
    fn test_limit_and_range_messages_use_configured_values() {
        for locale in Locale::ALL {
            let t = texts(locale);
            let limit = t.limit_message(3);
            assert!(limit.contains('3') && !limit.contains('{'), "{locale}: {limit}");
            let range = t.range_message(1, 8);
            assert!(range.contains('8') && !range.contains('{'), "{locale}: {range}");
        }
    }

    #[test]
    fn test_each_locale_has_its_own_texts() {
        assert!(texts(Locale::English).how_it_works.starts_with("## How it works"));
        assert!(texts(Locale::German).how_it_works.starts_with("## Wie es funktioniert"));
        assert!(texts(Locale::Turkish).how_it_works.starts_with("## Nasıl çalışır"));
    }
}
