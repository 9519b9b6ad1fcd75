// Neko Project config patching
//
// Both emulator flavors keep their settings in a flat key=value text file;
// the only line the launcher cares about is the first hard disk slot. The
// wine build (np21nt.ini) stores UTF-16LE, the native xnp21kai build plain
// UTF-8, so the encoding travels with the call.

use encoding_rs::UTF_16LE;
use regex::Regex;
use std::path::Path;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigEncoding {
    Utf16Le,
    Utf8,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PatchStatus {
    Ok,
    /// The config exists but could not be written back.
    WriteConfig,
    /// The config could not be read or has no disk image key.
    ConfigIncorrect,
}

fn decode(bytes: &[u8], encoding: ConfigEncoding) -> String {
    match encoding {
        ConfigEncoding::Utf16Le => {
            // keep the BOM as a char so the round trip is byte-exact
            let (text, _) = UTF_16LE.decode_without_bom_handling(bytes);
            text.into_owned()
        }
        ConfigEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn encode(text: &str, encoding: ConfigEncoding) -> Vec<u8> {
    match encoding {
        ConfigEncoding::Utf16Le => text
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect(),
        ConfigEncoding::Utf8 => text.as_bytes().to_vec(),
    }
}

/// Point the emulator's first hard disk slot at `image_path`.
///
/// Rewrites only the `HDD1FILE` line, preserving spacing around the `=`
/// and every other line byte for byte. When the file already points at
/// the image, nothing is written at all.
pub fn patch_disk_image_path(
    config_path: &Path,
    image_path: &str,
    encoding: ConfigEncoding,
) -> PatchStatus {
    let Ok(bytes) = std::fs::read(config_path) else {
        println!(
            "[lincher] cannot read emulator config {}",
            config_path.display()
        );
        return PatchStatus::ConfigIncorrect;
    };

    let text = decode(&bytes, encoding);
    let key = Regex::new(r"HDD1FILE ?= ?").unwrap();

    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let Some(index) = lines.iter().position(|line| key.is_match(line)) else {
        println!(
            "[lincher] no HDD1FILE entry in {}",
            config_path.display()
        );
        return PatchStatus::ConfigIncorrect;
    };

    let matched = key.find(&lines[index]).unwrap().as_str().to_string();
    let current = lines[index].replacen(&matched, "", 1);
    if current == image_path {
        return PatchStatus::Ok;
    }

    lines[index] = format!("{}{}", matched, image_path);
    let patched = encode(&lines.join("\n"), encoding);
    if std::fs::write(config_path, patched).is_err() {
        println!(
            "[lincher] cannot write emulator config {}",
            config_path.display()
        );
        return PatchStatus::WriteConfig;
    }

    PatchStatus::Ok
}
