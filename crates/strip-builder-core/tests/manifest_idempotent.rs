use std::fs;
use strip_builder_core::manifest::{append_entries, build_entry, entry_marker};
use strip_builder_core::prelude::*;

const HEADER: &str = "\n#----------------------------- Global Properties ----------------------------#\n\n/outputDir:bin/$(Platform)\n/platform:DesktopGL\n";

#[test]
fn entry_has_fixed_schema() {
    let e = build_entry("idle.png");
    let lines: Vec<&str> = e.lines().collect();
    assert_eq!(
        lines,
        vec![
            "",
            "#begin idle.png",
            "/importer:TextureImporter",
            "/processor:TextureProcessor",
            "/processorParam:ColorKeyColor=255,0,255,255",
            "/processorParam:ColorKeyEnabled=True",
            "/processorParam:GenerateMipmaps=False",
            "/processorParam:PremultiplyAlpha=True",
            "/processorParam:ResizeToPowerOfTwo=False",
            "/processorParam:MakeSquare=False",
            "/processorParam:TextureFormat=Color",
            "/build:idle.png",
        ]
    );
    assert!(e.ends_with('\n'));
}

#[test]
fn second_update_changes_nothing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("Content.mgcb");
    fs::write(&path, HEADER).expect("write");

    let names = vec!["run.png".to_string(), "idle.png".to_string()];
    let added = update_manifest(&path, &names).expect("first");
    assert_eq!(added, vec!["idle.png", "run.png"]);
    let after_first = fs::read_to_string(&path).expect("read");

    let added = update_manifest(&path, &names).expect("second");
    assert!(added.is_empty());
    let after_second = fs::read_to_string(&path).expect("read");
    assert_eq!(after_first, after_second);
}

#[test]
fn existing_content_is_preserved_and_new_entries_appended_sorted() {
    let mut content = format!("{}{}", HEADER, "\n# hand edited\n#begin dash.png\n/build:dash.png\n");
    let original = content.clone();
    let added = append_entries(&mut content, ["zip.png", "dash.png", "climb.png", "zip.png"]);
    assert_eq!(added, vec!["climb.png", "zip.png"]);
    assert!(content.starts_with(&original));
    let tail = &content[original.len()..];
    assert_eq!(tail, format!("{}{}", build_entry("climb.png"), build_entry("zip.png")));
    // the differing hand-written dash entry is left alone
    assert_eq!(content.matches(&entry_marker("dash.png")).count(), 1);
}

#[test]
fn marker_is_a_plain_substring_check() {
    let mut content = String::from("#begin player_idle.png\n");
    let added = append_entries(&mut content, ["player_idle.png", "idle.png"]);
    assert_eq!(added, vec!["idle.png"]);
}

#[test]
fn nothing_added_leaves_file_untouched() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("Content.mgcb");
    let content = format!("{}{}", HEADER, build_entry("idle.png"));
    fs::write(&path, &content).expect("write");
    let added = update_manifest(&path, ["idle.png"]).expect("update");
    assert!(added.is_empty());
    assert_eq!(fs::read_to_string(&path).expect("read"), content);
}

#[test]
fn missing_manifest_is_a_read_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("nope.mgcb");
    let err = update_manifest(&path, ["idle.png"]).unwrap_err();
    assert!(matches!(err, StripError::ManifestRead { .. }));
}
