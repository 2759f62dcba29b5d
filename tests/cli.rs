//! End-to-end runs of the deck binaries.

use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Output};

const EMUS_PER_INCH: f64 = 914_400.0;

fn run_in(dir: &Path, bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn binary")
}

fn read_member(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

/// Slide count and `(cx, cy)` from `ppt/presentation.xml`.
fn presentation_summary(path: &Path) -> (usize, (i64, i64)) {
    let xml = read_member(path, "ppt/presentation.xml");
    let mut reader = Reader::from_str(&xml);
    let mut slides = 0;
    let mut size = (0, 0);

    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) | Event::Start(e) => match e.name().as_ref() {
                b"p:sldId" => slides += 1,
                b"p:sldSz" => {
                    for attr in e.attributes() {
                        let attr = attr.unwrap();
                        let value: i64 = std::str::from_utf8(&attr.value).unwrap().parse().unwrap();
                        match attr.key.as_ref() {
                            b"cx" => size.0 = value,
                            b"cy" => size.1 = value,
                            _ => {},
                        }
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    (slides, size)
}

/// Every member of the archive that ends in `.xml` or `.rels` must parse.
fn assert_well_formed(path: &Path) {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    for i in 0..archive.len() {
        let mut member = archive.by_index(i).unwrap();
        let name = member.name().to_string();
        let mut xml = String::new();
        member.read_to_string(&mut xml).unwrap();

        let mut reader = Reader::from_str(&xml);
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => break,
                Ok(_) => {},
                Err(e) => panic!("{name} is not well-formed: {e}"),
            }
        }
    }
}

#[test]
fn research_pipeline_writes_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), env!("CARGO_BIN_EXE_research-pipeline"), &[]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim_end(),
        "Saved -> output/research-pipeline.pptx"
    );

    let deck = dir.path().join("output").join("research-pipeline.pptx");
    assert!(deck.is_file());

    let (slides, (cx, cy)) = presentation_summary(&deck);
    assert_eq!(slides, 1);
    assert_eq!(cx, (13.33 * EMUS_PER_INCH) as i64);
    assert_eq!(cy, (7.5 * EMUS_PER_INCH) as i64);
    assert_well_formed(&deck);
}

#[test]
fn hybrid_models_writes_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), env!("CARGO_BIN_EXE_hybrid-models"), &[]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim_end(),
        "Generated hybrid_models.pptx with 2 slides."
    );

    let deck = dir.path().join("hybrid_models.pptx");
    let (slides, (cx, cy)) = presentation_summary(&deck);
    assert_eq!(slides, 2);
    assert_eq!((cx, cy), (9_144_000, 6_858_000));
    assert_well_formed(&deck);

    let slide2 = read_member(&deck, "ppt/slides/slide2.xml");
    assert!(slide2.contains("Hybrid Model: Macro (Top) → Meso (Bottom), Both Horizontal"));
    assert!(slide2.contains(r#"<a:prstDash val="dash"/>"#));
}

#[test]
fn output_flag_overrides_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        env!("CARGO_BIN_EXE_hybrid-models"),
        &["--output", "decks/custom.pptx"],
    );

    assert!(out.status.success());
    assert!(dir.path().join("decks").join("custom.pptx").is_file());
    assert!(!dir.path().join("hybrid_models.pptx").exists());
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the output directory should be
    std::fs::write(dir.path().join("output"), b"not a directory").unwrap();

    let out = run_in(dir.path(), env!("CARGO_BIN_EXE_research-pipeline"), &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
