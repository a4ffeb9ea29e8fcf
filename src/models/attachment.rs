const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Archivo seleccionado por el usuario (todavía no enviado a ningún sitio)
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn kind(&self) -> FileKind {
        FileKind::sniff(&self.mime_type)
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.size_bytes)
    }
}

/// Tipo de archivo deducido del MIME, solo para elegir el icono
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FileKind {
    Image,
    Pdf,
    Word,
    Excel,
    Generic,
}

impl FileKind {
    /// Orden fijo: image, pdf, word/document, excel/spreadsheet
    pub fn sniff(mime_type: &str) -> Self {
        if mime_type.contains("image/") {
            FileKind::Image
        } else if mime_type.contains("pdf") {
            FileKind::Pdf
        } else if mime_type.contains("word") || mime_type.contains("document") {
            FileKind::Word
        } else if mime_type.contains("excel") || mime_type.contains("spreadsheet") {
            FileKind::Excel
        } else {
            FileKind::Generic
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            FileKind::Image => "fas fa-image",
            FileKind::Pdf => "fas fa-file-pdf",
            FileKind::Word => "fas fa-file-word",
            FileKind::Excel => "fas fa-file-excel",
            FileKind::Generic => "fas fa-file",
        }
    }
}

/// Tamaño legible: 0 -> "0 Bytes", si no valor en [1, 1024) con 2 decimales.
/// Por encima de GB se queda en GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let last = SIZE_UNITS.len() - 1;
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < last {
        value /= 1024.0;
        unit += 1;
    }

    // 1023.999 KB se mostraría "1024.00 KB"
    if unit < last && (value * 100.0).round() >= 102_400.0 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes_is_special_cased() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn sizes_scale_into_the_right_unit() {
        assert_eq!(format_file_size(1), "1.00 Bytes");
        assert_eq!(format_file_size(1023), "1023.00 Bytes");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1536), "1.50 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024), "5.00 GB");
    }

    #[test]
    fn rounding_never_shows_1024_in_a_smaller_unit() {
        assert_eq!(format_file_size(1024 * 1024 - 1), "1.00 MB");
    }

    #[test]
    fn terabytes_stay_in_gigabytes() {
        assert_eq!(format_file_size(2 * 1024u64.pow(4)), "2048.00 GB");
    }

    #[test]
    fn every_nonzero_size_has_two_decimals_and_a_known_unit() {
        for bytes in [1u64, 7, 999, 1000, 4096, 123_456, 9_876_543, 3_000_000_000] {
            let formatted = format_file_size(bytes);
            let (number, unit) = formatted.split_once(' ').expect("value and unit");
            assert!(SIZE_UNITS.contains(&unit), "{}", formatted);
            let decimals = number.split_once('.').map(|(_, d)| d.len());
            assert_eq!(decimals, Some(2), "{}", formatted);
            let value: f64 = number.parse().expect("numeric value");
            assert!((1.0..1024.0).contains(&value), "{}", formatted);
        }
    }

    #[test]
    fn icons_follow_mime_sniffing_order() {
        assert_eq!(FileKind::sniff("image/png"), FileKind::Image);
        assert_eq!(FileKind::sniff("application/pdf"), FileKind::Pdf);
        assert_eq!(FileKind::sniff("application/msword"), FileKind::Word);
        assert_eq!(FileKind::sniff("application/vnd.ms-excel"), FileKind::Excel);
        assert_eq!(FileKind::sniff("text/plain"), FileKind::Generic);
        assert_eq!(FileKind::sniff(""), FileKind::Generic);
        // "officedocument" gana a "spreadsheet" porque word/document va antes
        assert_eq!(
            FileKind::sniff("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            FileKind::Word
        );
        assert_eq!(FileKind::Pdf.icon_class(), "fas fa-file-pdf");
    }

    #[test]
    fn attachment_exposes_kind_and_size() {
        let file = Attachment::new("factura.pdf", 2048, "application/pdf");
        assert_eq!(file.kind(), FileKind::Pdf);
        assert_eq!(file.display_size(), "2.00 KB");
    }
}
