//! Translation string tables.
//!
//! Every label the UI renders goes through [`translate`]. The tables are
//! total per language and checked at compile time by match exhaustiveness,
//! so a lookup can never miss. Relative-time strings carry an `{n}`
//! placeholder that the caller substitutes.

use crate::language::Language;

/// Every translatable label in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationKey {
    ReaderTab,
    GeneratorTab,
    ReaderTitle,
    ReaderDescription,
    UploadInstructions,
    UploadFormats,
    PasteInstructions,
    PasteSubtext,
    QrCodeImage,
    DecodedContent,
    DecodedPlaceholder,
    CopyText,
    OpenLink,
    ErrorTitle,
    NoImageError,
    ImageLoadError,
    QrNotFoundError,
    GeneratorTitle,
    GeneratorDescription,
    TextToEncode,
    EnterTextPlaceholder,
    GeneratedQrCode,
    SaveQrCode,
    QrNotGeneratedError,
    HistoryTitle,
    NoHistory,
    ClearHistory,
    RemoveFromHistory,
    CopiedNotice,
    SavedNotice,
    JustNow,
    MinutesAgo,
    HoursAgo,
    DaysAgo,
    LanguageLabel,
}

impl TranslationKey {
    /// Every key, for exhaustiveness checks in tests.
    pub const ALL: [TranslationKey; 35] = [
        TranslationKey::ReaderTab,
        TranslationKey::GeneratorTab,
        TranslationKey::ReaderTitle,
        TranslationKey::ReaderDescription,
        TranslationKey::UploadInstructions,
        TranslationKey::UploadFormats,
        TranslationKey::PasteInstructions,
        TranslationKey::PasteSubtext,
        TranslationKey::QrCodeImage,
        TranslationKey::DecodedContent,
        TranslationKey::DecodedPlaceholder,
        TranslationKey::CopyText,
        TranslationKey::OpenLink,
        TranslationKey::ErrorTitle,
        TranslationKey::NoImageError,
        TranslationKey::ImageLoadError,
        TranslationKey::QrNotFoundError,
        TranslationKey::GeneratorTitle,
        TranslationKey::GeneratorDescription,
        TranslationKey::TextToEncode,
        TranslationKey::EnterTextPlaceholder,
        TranslationKey::GeneratedQrCode,
        TranslationKey::SaveQrCode,
        TranslationKey::QrNotGeneratedError,
        TranslationKey::HistoryTitle,
        TranslationKey::NoHistory,
        TranslationKey::ClearHistory,
        TranslationKey::RemoveFromHistory,
        TranslationKey::CopiedNotice,
        TranslationKey::SavedNotice,
        TranslationKey::JustNow,
        TranslationKey::MinutesAgo,
        TranslationKey::HoursAgo,
        TranslationKey::DaysAgo,
        TranslationKey::LanguageLabel,
    ];
}

/// Look up `key` in `language`'s table.
pub fn translate(language: Language, key: TranslationKey) -> &'static str {
    match language {
        Language::English => english(key),
        Language::Spanish => spanish(key),
        Language::French => french(key),
        Language::German => german(key),
        Language::Chinese => chinese(key),
        Language::Japanese => japanese(key),
    }
}

fn english(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::ReaderTab => "Reader",
        K::GeneratorTab => "Generator",
        K::ReaderTitle => "QR Code Reader",
        K::ReaderDescription => "Scan a QR code from an image file or the clipboard",
        K::UploadInstructions => "Click to choose an image, or drop one here",
        K::UploadFormats => "PNG, JPG, GIF, BMP, WEBP",
        K::PasteInstructions => "You can also paste an image from the clipboard",
        K::PasteSubtext => "Ctrl+V / Cmd+V",
        K::QrCodeImage => "QR code image",
        K::DecodedContent => "Decoded content",
        K::DecodedPlaceholder => "The decoded text will appear here",
        K::CopyText => "Copy text",
        K::OpenLink => "Open link",
        K::ErrorTitle => "Error",
        K::NoImageError => "The clipboard does not contain an image.",
        K::ImageLoadError => "The file could not be read as an image.",
        K::QrNotFoundError => "QR code not found or unreadable. Try a clearer image.",
        K::GeneratorTitle => "QR Code Generator",
        K::GeneratorDescription => "Turn any text into a QR code",
        K::TextToEncode => "Text to encode",
        K::EnterTextPlaceholder => "Enter text or a URL",
        K::GeneratedQrCode => "Generated QR code",
        K::SaveQrCode => "Save as PNG",
        K::QrNotGeneratedError => "No QR code has been generated yet.",
        K::HistoryTitle => "History",
        K::NoHistory => "Nothing scanned yet.",
        K::ClearHistory => "Clear history",
        K::RemoveFromHistory => "Remove",
        K::CopiedNotice => "Copied to clipboard",
        K::SavedNotice => "Saved",
        K::JustNow => "just now",
        K::MinutesAgo => "{n} min ago",
        K::HoursAgo => "{n} h ago",
        K::DaysAgo => "{n} d ago",
        K::LanguageLabel => "Language",
    }
}

fn spanish(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::ReaderTab => "Lector",
        K::GeneratorTab => "Generador",
        K::ReaderTitle => "Lector de códigos QR",
        K::ReaderDescription => "Escanea un código QR desde un archivo de imagen o el portapapeles",
        K::UploadInstructions => "Haz clic para elegir una imagen o arrastra una aquí",
        K::UploadFormats => "PNG, JPG, GIF, BMP, WEBP",
        K::PasteInstructions => "También puedes pegar una imagen desde el portapapeles",
        K::PasteSubtext => "Ctrl+V / Cmd+V",
        K::QrCodeImage => "Imagen del código QR",
        K::DecodedContent => "Contenido decodificado",
        K::DecodedPlaceholder => "El texto decodificado aparecerá aquí",
        K::CopyText => "Copiar texto",
        K::OpenLink => "Abrir enlace",
        K::ErrorTitle => "Error",
        K::NoImageError => "El portapapeles no contiene ninguna imagen.",
        K::ImageLoadError => "El archivo no se pudo leer como imagen.",
        K::QrNotFoundError => "Código QR no encontrado o ilegible. Prueba con una imagen más nítida.",
        K::GeneratorTitle => "Generador de códigos QR",
        K::GeneratorDescription => "Convierte cualquier texto en un código QR",
        K::TextToEncode => "Texto a codificar",
        K::EnterTextPlaceholder => "Escribe un texto o una URL",
        K::GeneratedQrCode => "Código QR generado",
        K::SaveQrCode => "Guardar como PNG",
        K::QrNotGeneratedError => "Todavía no se ha generado ningún código QR.",
        K::HistoryTitle => "Historial",
        K::NoHistory => "Aún no se ha escaneado nada.",
        K::ClearHistory => "Borrar historial",
        K::RemoveFromHistory => "Eliminar",
        K::CopiedNotice => "Copiado al portapapeles",
        K::SavedNotice => "Guardado",
        K::JustNow => "ahora mismo",
        K::MinutesAgo => "hace {n} min",
        K::HoursAgo => "hace {n} h",
        K::DaysAgo => "hace {n} d",
        K::LanguageLabel => "Idioma",
    }
}

fn french(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::ReaderTab => "Lecteur",
        K::GeneratorTab => "Générateur",
        K::ReaderTitle => "Lecteur de codes QR",
        K::ReaderDescription => "Scannez un code QR depuis un fichier image ou le presse-papiers",
        K::UploadInstructions => "Cliquez pour choisir une image ou déposez-en une ici",
        K::UploadFormats => "PNG, JPG, GIF, BMP, WEBP",
        K::PasteInstructions => "Vous pouvez aussi coller une image depuis le presse-papiers",
        K::PasteSubtext => "Ctrl+V / Cmd+V",
        K::QrCodeImage => "Image du code QR",
        K::DecodedContent => "Contenu décodé",
        K::DecodedPlaceholder => "Le texte décodé apparaîtra ici",
        K::CopyText => "Copier le texte",
        K::OpenLink => "Ouvrir le lien",
        K::ErrorTitle => "Erreur",
        K::NoImageError => "Le presse-papiers ne contient pas d'image.",
        K::ImageLoadError => "Le fichier n'a pas pu être lu comme une image.",
        K::QrNotFoundError => "Code QR introuvable ou illisible. Essayez une image plus nette.",
        K::GeneratorTitle => "Générateur de codes QR",
        K::GeneratorDescription => "Transformez n'importe quel texte en code QR",
        K::TextToEncode => "Texte à encoder",
        K::EnterTextPlaceholder => "Saisissez un texte ou une URL",
        K::GeneratedQrCode => "Code QR généré",
        K::SaveQrCode => "Enregistrer en PNG",
        K::QrNotGeneratedError => "Aucun code QR n'a encore été généré.",
        K::HistoryTitle => "Historique",
        K::NoHistory => "Rien n'a encore été scanné.",
        K::ClearHistory => "Effacer l'historique",
        K::RemoveFromHistory => "Supprimer",
        K::CopiedNotice => "Copié dans le presse-papiers",
        K::SavedNotice => "Enregistré",
        K::JustNow => "à l'instant",
        K::MinutesAgo => "il y a {n} min",
        K::HoursAgo => "il y a {n} h",
        K::DaysAgo => "il y a {n} j",
        K::LanguageLabel => "Langue",
    }
}

fn german(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::ReaderTab => "Leser",
        K::GeneratorTab => "Generator",
        K::ReaderTitle => "QR-Code-Leser",
        K::ReaderDescription => "Scanne einen QR-Code aus einer Bilddatei oder der Zwischenablage",
        K::UploadInstructions => "Klicken, um ein Bild zu wählen, oder eines hierher ziehen",
        K::UploadFormats => "PNG, JPG, GIF, BMP, WEBP",
        K::PasteInstructions => "Du kannst auch ein Bild aus der Zwischenablage einfügen",
        K::PasteSubtext => "Strg+V / Cmd+V",
        K::QrCodeImage => "QR-Code-Bild",
        K::DecodedContent => "Dekodierter Inhalt",
        K::DecodedPlaceholder => "Der dekodierte Text erscheint hier",
        K::CopyText => "Text kopieren",
        K::OpenLink => "Link öffnen",
        K::ErrorTitle => "Fehler",
        K::NoImageError => "Die Zwischenablage enthält kein Bild.",
        K::ImageLoadError => "Die Datei konnte nicht als Bild gelesen werden.",
        K::QrNotFoundError => "QR-Code nicht gefunden oder unlesbar. Versuche ein schärferes Bild.",
        K::GeneratorTitle => "QR-Code-Generator",
        K::GeneratorDescription => "Mache aus beliebigem Text einen QR-Code",
        K::TextToEncode => "Zu kodierender Text",
        K::EnterTextPlaceholder => "Text oder URL eingeben",
        K::GeneratedQrCode => "Generierter QR-Code",
        K::SaveQrCode => "Als PNG speichern",
        K::QrNotGeneratedError => "Es wurde noch kein QR-Code generiert.",
        K::HistoryTitle => "Verlauf",
        K::NoHistory => "Noch nichts gescannt.",
        K::ClearHistory => "Verlauf löschen",
        K::RemoveFromHistory => "Entfernen",
        K::CopiedNotice => "In die Zwischenablage kopiert",
        K::SavedNotice => "Gespeichert",
        K::JustNow => "gerade eben",
        K::MinutesAgo => "vor {n} Min.",
        K::HoursAgo => "vor {n} Std.",
        K::DaysAgo => "vor {n} Tagen",
        K::LanguageLabel => "Sprache",
    }
}

fn chinese(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::ReaderTab => "识别",
        K::GeneratorTab => "生成",
        K::ReaderTitle => "二维码识别",
        K::ReaderDescription => "从图片文件或剪贴板扫描二维码",
        K::UploadInstructions => "点击选择图片，或拖放到此处",
        K::UploadFormats => "PNG、JPG、GIF、BMP、WEBP",
        K::PasteInstructions => "也可以从剪贴板粘贴图片",
        K::PasteSubtext => "Ctrl+V / Cmd+V",
        K::QrCodeImage => "二维码图片",
        K::DecodedContent => "识别结果",
        K::DecodedPlaceholder => "识别出的文本将显示在这里",
        K::CopyText => "复制文本",
        K::OpenLink => "打开链接",
        K::ErrorTitle => "错误",
        K::NoImageError => "剪贴板中没有图片。",
        K::ImageLoadError => "无法将该文件读取为图片。",
        K::QrNotFoundError => "未找到二维码或无法识别，请尝试更清晰的图片。",
        K::GeneratorTitle => "二维码生成",
        K::GeneratorDescription => "将任意文本转换为二维码",
        K::TextToEncode => "要编码的文本",
        K::EnterTextPlaceholder => "输入文本或网址",
        K::GeneratedQrCode => "生成的二维码",
        K::SaveQrCode => "保存为 PNG",
        K::QrNotGeneratedError => "尚未生成二维码。",
        K::HistoryTitle => "历史记录",
        K::NoHistory => "还没有扫描记录。",
        K::ClearHistory => "清空历史",
        K::RemoveFromHistory => "删除",
        K::CopiedNotice => "已复制到剪贴板",
        K::SavedNotice => "已保存",
        K::JustNow => "刚刚",
        K::MinutesAgo => "{n} 分钟前",
        K::HoursAgo => "{n} 小时前",
        K::DaysAgo => "{n} 天前",
        K::LanguageLabel => "语言",
    }
}

fn japanese(key: TranslationKey) -> &'static str {
    use TranslationKey as K;
    match key {
        K::ReaderTab => "読み取り",
        K::GeneratorTab => "作成",
        K::ReaderTitle => "QRコードリーダー",
        K::ReaderDescription => "画像ファイルまたはクリップボードからQRコードを読み取ります",
        K::UploadInstructions => "クリックして画像を選択、またはここにドロップ",
        K::UploadFormats => "PNG、JPG、GIF、BMP、WEBP",
        K::PasteInstructions => "クリップボードから画像を貼り付けることもできます",
        K::PasteSubtext => "Ctrl+V / Cmd+V",
        K::QrCodeImage => "QRコード画像",
        K::DecodedContent => "読み取り結果",
        K::DecodedPlaceholder => "読み取ったテキストがここに表示されます",
        K::CopyText => "テキストをコピー",
        K::OpenLink => "リンクを開く",
        K::ErrorTitle => "エラー",
        K::NoImageError => "クリップボードに画像がありません。",
        K::ImageLoadError => "ファイルを画像として読み込めませんでした。",
        K::QrNotFoundError => "QRコードが見つからないか読み取れません。より鮮明な画像をお試しください。",
        K::GeneratorTitle => "QRコード作成",
        K::GeneratorDescription => "任意のテキストをQRコードに変換します",
        K::TextToEncode => "エンコードするテキスト",
        K::EnterTextPlaceholder => "テキストまたはURLを入力",
        K::GeneratedQrCode => "作成されたQRコード",
        K::SaveQrCode => "PNGとして保存",
        K::QrNotGeneratedError => "まだQRコードが作成されていません。",
        K::HistoryTitle => "履歴",
        K::NoHistory => "まだ何もスキャンされていません。",
        K::ClearHistory => "履歴を消去",
        K::RemoveFromHistory => "削除",
        K::CopiedNotice => "クリップボードにコピーしました",
        K::SavedNotice => "保存しました",
        K::JustNow => "たった今",
        K::MinutesAgo => "{n} 分前",
        K::HoursAgo => "{n} 時間前",
        K::DaysAgo => "{n} 日前",
        K::LanguageLabel => "言語",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_covers_every_key() {
        for lang in Language::ALL {
            for key in TranslationKey::ALL {
                assert!(
                    !translate(lang, key).is_empty(),
                    "empty translation for {lang:?}/{key:?}"
                );
            }
        }
    }

    #[test]
    fn test_relative_time_templates_have_placeholder() {
        for lang in Language::ALL {
            for key in [
                TranslationKey::MinutesAgo,
                TranslationKey::HoursAgo,
                TranslationKey::DaysAgo,
            ] {
                assert!(
                    translate(lang, key).contains("{n}"),
                    "missing {{n}} in {lang:?}/{key:?}"
                );
            }
        }
    }

    #[test]
    fn test_languages_actually_differ() {
        assert_ne!(
            translate(Language::English, TranslationKey::HistoryTitle),
            translate(Language::German, TranslationKey::HistoryTitle),
        );
    }
}
