use crate::paths::PATH_HOME;

use dialog::{Choice, DialogBox};
use rfd::FileDialog;
use std::error::Error;
use std::path::PathBuf;

pub fn msg(title: &str, contents: &str) {
    let _ = dialog::Message::new(contents).title(title).show();
}

pub fn yesno(title: &str, contents: &str) -> bool {
    if let Ok(prompt) = dialog::Question::new(contents).title(title).show() {
        if prompt == Choice::Yes {
            return true;
        }
    }
    false
}

pub fn dir_dialog() -> Result<PathBuf, Box<dyn Error>> {
    let dir = FileDialog::new()
        .set_title("Select Folder")
        .set_directory(&*PATH_HOME)
        .pick_folder()
        .ok_or("No folder selected")?;
    Ok(dir)
}

pub fn file_dialog(title: &str) -> Result<PathBuf, Box<dyn Error>> {
    let file = FileDialog::new()
        .set_title(title)
        .set_directory(&*PATH_HOME)
        .pick_file()
        .ok_or("No file selected")?;
    Ok(file)
}

/// Pick a Windows executable (game, custom tool or thcrap loader).
pub fn exe_dialog(title: &str) -> Result<PathBuf, Box<dyn Error>> {
    let file = FileDialog::new()
        .set_title(title)
        .set_directory(&*PATH_HOME)
        .add_filter("Windows executable", &["exe", "bat", "lnk"])
        .add_filter("All files", &["*"])
        .pick_file()
        .ok_or("No file selected")?;
    Ok(file)
}

/// Pick a PC-98 hard disk image.
pub fn hdi_dialog() -> Result<PathBuf, Box<dyn Error>> {
    let file = FileDialog::new()
        .set_title("Select HDI image")
        .set_directory(&*PATH_HOME)
        .add_filter("PC-98 disk image", &["hdi"])
        .add_filter("All files", &["*"])
        .pick_file()
        .ok_or("No file selected")?;
    Ok(file)
}
