/*!
 * Tests for file utility functions
 */

use anyhow::Result;
use std::path::Path;
use subconv::file_utils::FileManager;
use subconv::SubtitleFormat;
use crate::common;

#[test]
fn test_outputPathFor_withTarget_shouldSwapExtension() {
    let path = FileManager::output_path_for("/movies/film.en.srt", SubtitleFormat::Vtt);
    assert_eq!(path, Path::new("/movies/film.en.vtt"));
}

#[test]
fn test_findSubtitleFiles_withMixedFiles_shouldOnlyReturnSubtitles() -> Result<()> {
    let dir = common::create_temp_dir()?;
    common::create_test_file(dir.path(), "a.srt", common::SRT_SAMPLE)?;
    common::create_test_file(dir.path(), "b.VTT", common::VTT_SAMPLE)?;
    common::create_test_file(dir.path(), "notes.txt", "nothing")?;
    common::create_test_file(dir.path(), "nested/c.dfxp", "")?;

    let recursive = FileManager::find_subtitle_files(dir.path(), true)?;
    assert_eq!(recursive.len(), 3);

    let flat = FileManager::find_subtitle_files(dir.path(), false)?;
    assert_eq!(flat.len(), 2);
    assert!(flat.iter().all(|p| p.parent() == Some(dir.path())));
    Ok(())
}

#[test]
fn test_writeToFile_withMissingParent_shouldCreateIt() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("x").join("y").join("out.srt");

    FileManager::write_to_file(&path, "content")?;
    assert!(FileManager::file_exists(&path));
    assert!(FileManager::dir_exists(dir.path().join("x").join("y")));
    assert_eq!(FileManager::read_to_string(&path)?, "content");
    Ok(())
}

#[test]
fn test_readToString_withMissingFile_shouldFail() -> Result<()> {
    let dir = common::create_temp_dir()?;
    assert!(FileManager::read_to_string(dir.path().join("missing.srt")).is_err());
    Ok(())
}
