use chrono::{DateTime, Local};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * 1024 * 1024;

#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        "Zero bytes".to_string()
    } else if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.0} KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GIB as f64)
    }
}

#[must_use]
pub fn format_timestamp(ts: DateTime<Local>) -> String {
    ts.format("%b %d, %Y at %I:%M %p").to_string()
}

/// Zero renders as an empty cell rather than "0".
#[must_use]
pub fn format_child_count(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}

/// Human description for a file extension (without the leading dot).
#[must_use]
pub fn describe_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "zip" => "ZIP Archive",
        "tar" => "TAR Archive",
        "gz" => "Gzip Compressed Archive",
        "tgz" => "Tar Gzip Archive",
        "rar" => "RAR Archive",
        "7z" => "7-Zip Archive",

        "py" => "Python Source Code File",
        "js" => "JavaScript Source Code File",
        "html" => "HTML File",
        "css" => "CSS File",
        "cpp" => "C++ Source Code File",
        "java" => "Java Source Code File",
        "c" => "C Source Code File",

        "rtf" => "Rich Text Format File",
        "doc" | "docx" => "Microsoft Word Document",
        "odt" => "OpenDocument Text Document",
        "pdf" => "Portable Document Format File",
        "txt" => "Plain Text File",
        "epub" => "Electronic Publication File",
        "azw3" | "mobi" => "Amazon Kindle eBook",
        "djvu" => "DjVu Image File",
        "fb2" => "FictionBook2 File",
        "pdb" => "PalmDOC eBook",
        "prc" => "Palm Reader Compressed eBook",

        "mp3" => "MP3 Audio File",
        "wav" => "WAV Audio File",
        "flac" => "FLAC Audio File",
        "aac" => "AAC Audio File",

        "mp4" => "MP4 Video File",
        "avi" => "AVI Video File",
        "mov" => "MOV Video File",
        "mkv" => "MKV Video File",
        "wmv" => "Windows Media Video File",
        "flv" => "Flash Video File",
        "webm" => "WebM Video File",

        "gif" => "GIF Image File",
        "png" => "PNG Image File",
        "jpeg" | "jpg" => "JPEG Image File",
        "bmp" => "BMP Image File",
        "tif" | "tiff" => "TIFF Image File",
        "webp" => "WEBP Image File",
        "svg" => "Scalable Vector Graphics File",
        "svgz" => "Scalable Vector Graphics Compressed File",
        "psd" => "Photoshop Document File",
        "ai" => "Adobe Illustrator File",
        "cdr" => "CorelDRAW File",
        "indd" => "InDesign Document File",

        "ppt" | "pptx" => "PowerPoint Presentation File",
        "pps" | "ppsx" => "PowerPoint Show File",
        "odp" => "OpenDocument Presentation File",
        "key" => "Keynote Presentation File",
        "numbers" => "Numbers Spreadsheet File",
        "pages" => "Pages Document File",

        "xls" | "xlsx" => "Microsoft Excel Spreadsheet File",
        "ods" => "OpenDocument Spreadsheet File",
        "csv" => "Comma-Separated Values File",
        "tsv" => "Tab-Separated Values File",
        "json" => "JSON File",
        "xml" => "XML File",
        "yaml" | "yml" => "YAML File",

        "sql" => "SQL Database File",
        "mdb" | "accdb" => "Microsoft Access Database File",
        "sqlite" => "SQLite Database File",
        "db" => "Database File",

        "exe" => "Executable File",
        "dll" => "Dynamic-Link Library File",
        "jar" => "Java Archive File",
        "apk" => "Android Package File",
        "ipa" => "iOS App File",
        "dmg" => "Mac OS X Disk Image File",
        "iso" => "Disc Image File",
        "torrent" => "BitTorrent File",

        "srt" => "SubRip Subtitle File",
        "ass" => "Advanced SubStation Alpha Subtitle File",
        "ssa" => "SSA Subtitle File",

        "ttf" => "TrueType Font File",
        "otf" => "OpenType Font File",
        "woff" => "Web Open Font Format File",
        "woff2" => "Web Open Font Format 2 File",
        "eot" => "Embedded OpenType Font File",

        "ico" => "Icon File",
        "cur" => "Cursor File",
        "ani" => "Animated Cursor File",

        _ => "Document File",
    }
}
