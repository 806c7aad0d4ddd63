use crate::error::ManifestError;
use crate::listing::{list_dir, relative_posix};
use crate::types::FontEntry;
use std::fs;
use std::path::Path;
use ttf_parser::{name_id, Face};

const FONT_DIR: &str = "font";

/// List font files as `(family name, path)` pairs.
///
/// The family is the name-ID 1 record of the face's name table, recorded so
/// the runtime can resolve a requested family to a file without re-parsing
/// font metadata at load time. The font directory is expected to contain
/// only valid fonts; any file that does not parse aborts the run.
pub fn list_fonts(root: &Path) -> Result<Vec<FontEntry>, ManifestError> {
    let mut fonts = Vec::new();
    for entry in list_dir(&root.join(FONT_DIR))? {
        let data = fs::read(&entry)?;
        let family = family_name(&data, &entry)?;
        log::info!("Font {}: family '{}'", entry.display(), family);
        fonts.push(FontEntry(family, relative_posix(&entry, root)?));
    }
    Ok(fonts)
}

/// Read the font family (name-ID 1) from a face's name table.
fn family_name(data: &[u8], path: &Path) -> Result<String, ManifestError> {
    let face = Face::parse(data, 0).map_err(|e| ManifestError::FontParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    face.names()
        .into_iter()
        .filter(|name| name.name_id == name_id::FAMILY && name.is_unicode())
        .find_map(|name| name.to_string())
        .ok_or_else(|| ManifestError::FontParse {
            path: path.to_path_buf(),
            message: "no decodable family name record".to_string(),
        })
}

/// Build a minimal TrueType face in memory: table directory plus `head`,
/// `hhea` and `maxp`, and a `name` table carrying `family` as the name-ID 1
/// record (Windows platform, Unicode BMP encoding).
#[cfg(test)]
pub(crate) fn tiny_font(family: &str) -> Vec<u8> {
    fn push_u16(buf: &mut Vec<u8>, v: u16) {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    fn push_u32(buf: &mut Vec<u8>, v: u32) {
        buf.extend_from_slice(&v.to_be_bytes());
    }

    let mut head = Vec::new();
    push_u32(&mut head, 0x0001_0000); // version
    push_u32(&mut head, 0x0001_0000); // font revision
    push_u32(&mut head, 0); // checksum adjustment
    push_u32(&mut head, 0x5F0F_3CF5); // magic
    push_u16(&mut head, 0); // flags
    push_u16(&mut head, 1000); // units per em
    head.extend_from_slice(&[0u8; 16]); // created + modified
    for _ in 0..4 {
        push_u16(&mut head, 0); // bbox
    }
    push_u16(&mut head, 0); // mac style
    push_u16(&mut head, 8); // lowest rec ppem
    push_u16(&mut head, 2); // font direction hint
    push_u16(&mut head, 0); // index-to-loc format
    push_u16(&mut head, 0); // glyph data format

    let mut hhea = Vec::new();
    push_u32(&mut hhea, 0x0001_0000); // version
    push_u16(&mut hhea, 800); // ascender
    push_u16(&mut hhea, (-200i16) as u16); // descender
    push_u16(&mut hhea, 0); // line gap
    push_u16(&mut hhea, 500); // advance width max
    for _ in 0..3 {
        push_u16(&mut hhea, 0); // min lsb / min rsb / x max extent
    }
    push_u16(&mut hhea, 1); // caret slope rise
    push_u16(&mut hhea, 0); // caret slope run
    push_u16(&mut hhea, 0); // caret offset
    for _ in 0..4 {
        push_u16(&mut hhea, 0); // reserved
    }
    push_u16(&mut hhea, 0); // metric data format
    push_u16(&mut hhea, 1); // number of h metrics

    let mut maxp = Vec::new();
    push_u32(&mut maxp, 0x0000_5000); // version 0.5
    push_u16(&mut maxp, 1); // glyph count

    let utf16: Vec<u8> = family
        .encode_utf16()
        .flat_map(|unit| unit.to_be_bytes())
        .collect();
    let mut name = Vec::new();
    push_u16(&mut name, 0); // format
    push_u16(&mut name, 1); // record count
    push_u16(&mut name, 6 + 12); // string storage offset
    push_u16(&mut name, 3); // platform: windows
    push_u16(&mut name, 1); // encoding: unicode bmp
    push_u16(&mut name, 0x0409); // language: en-US
    push_u16(&mut name, 1); // name id: family
    push_u16(&mut name, utf16.len() as u16);
    push_u16(&mut name, 0); // string offset
    name.extend_from_slice(&utf16);

    let tables: [(&[u8; 4], &Vec<u8>); 4] = [
        (b"head", &head),
        (b"hhea", &hhea),
        (b"maxp", &maxp),
        (b"name", &name),
    ];

    let mut font = Vec::new();
    push_u32(&mut font, 0x0001_0000); // sfnt version
    push_u16(&mut font, tables.len() as u16);
    push_u16(&mut font, 64); // search range
    push_u16(&mut font, 2); // entry selector
    push_u16(&mut font, 0); // range shift

    let mut offset = 12 + tables.len() * 16;
    let mut data = Vec::new();
    for (tag, table) in tables {
        font.extend_from_slice(tag);
        push_u32(&mut font, 0); // checksum, not validated by the parser
        push_u32(&mut font, offset as u32);
        push_u32(&mut font, table.len() as u32);
        data.extend_from_slice(table);
        offset += table.len();
    }
    font.extend_from_slice(&data);
    font
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_family_name_extracted() {
        let data = tiny_font("Fira Sans");
        let family = family_name(&data, Path::new("font/fira.ttf")).unwrap();
        assert_eq!(family, "Fira Sans");
    }

    #[test]
    fn test_list_fonts_pairs_family_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let font_dir = dir.path().join(FONT_DIR);
        fs::create_dir(&font_dir).unwrap();
        fs::write(font_dir.join("title.ttf"), tiny_font("Game Title")).unwrap();
        fs::write(font_dir.join("body.ttf"), tiny_font("Body Text")).unwrap();

        let fonts = list_fonts(dir.path()).unwrap();
        assert_eq!(
            fonts,
            [
                FontEntry("Body Text".to_string(), "font/body.ttf".to_string()),
                FontEntry("Game Title".to_string(), "font/title.ttf".to_string()),
            ]
        );
    }

    #[test]
    fn test_unparseable_font_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let font_dir = dir.path().join(FONT_DIR);
        fs::create_dir(&font_dir).unwrap();
        fs::write(font_dir.join("broken.ttf"), b"definitely not a font").unwrap();

        let err = list_fonts(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::FontParse { .. }));
    }

    #[test]
    fn test_missing_font_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_fonts(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let font_dir = dir.path().join(FONT_DIR);
        fs::create_dir(&font_dir).unwrap();
        File::create(font_dir.join("empty.ttf")).unwrap();

        assert!(list_fonts(dir.path()).is_err());
    }
}
