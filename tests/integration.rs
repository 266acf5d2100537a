use mdtoc::{
    OverwritePolicy, TocBuilder, TocError, TocLine, build_toc, format_toc, generate, validate,
};
use std::fs;
use tempfile::tempdir;
#[test]
fn integration_sample_tree() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello\nworld\n").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/img.bin"), [0u8, 159, 146, 150]).unwrap();
    let options = TocBuilder::new(dir.path()).build();
    let toc = build_toc(&options).unwrap();
    assert_eq!(
        format_toc(&toc),
        "- a.txt\n    hello\n    world\n# sub\n- img.bin\n    (MIME type: unknown)"
    );
    let stats = toc.stats();
    assert_eq!(stats.directories, 1);
    assert_eq!(stats.text_files, 1);
    assert_eq!(stats.binary_files, 1);
    assert_eq!(stats.content_lines, 2);
}
#[test]
fn integration_sorted_and_trimmed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.md"), "  indented  \r\n\ttabbed\n").unwrap();
    fs::write(dir.path().join("a.csv"), "x,y").unwrap();
    fs::create_dir(dir.path().join("c")).unwrap();
    fs::write(dir.path().join("c/empty.txt"), "").unwrap();
    let toc = build_toc(&TocBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        format_toc(&toc),
        "- a.csv\n    x,y\n- b.md\n    indented\n    tabbed\n# c\n- empty.txt"
    );
}
#[test]
fn integration_heading_depths() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    let toc = build_toc(&TocBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        toc.lines,
        vec![
            TocLine::Heading { level: 1, name: "a".into() },
            TocLine::Heading { level: 2, name: "b".into() },
            TocLine::Heading { level: 3, name: "c".into() },
            TocLine::Heading { level: 1, name: "empty".into() },
        ]
    );
}
#[test]
fn integration_exclude_log_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("debug.log"), "noise").unwrap();
    fs::write(dir.path().join("keep.txt"), "kept").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/trace.log"), "noise").unwrap();
    let options = TocBuilder::new(dir.path())
        .exclude_patterns(vec!["*.log".into()])
        .build();
    let out = format_toc(&build_toc(&options).unwrap());
    assert!(!out.contains("debug.log"));
    assert!(!out.contains("trace.log"));
    assert!(!out.contains("noise"));
    assert_eq!(out, "- keep.txt\n    kept\n# nested");
}
#[test]
fn integration_exclude_git_with_extra_extension() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
    fs::write(dir.path().join(".git/config"), "[core]").unwrap();
    fs::write(dir.path().join(".git/objects/ab"), "blob").unwrap();
    fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();
    let options = TocBuilder::new(dir.path())
        .extra_extension(Some("py".into()))
        .exclude_patterns(vec![".git".into()])
        .build();
    let out = format_toc(&build_toc(&options).unwrap());
    assert_eq!(out, "- main.py\n    print('hi')");
}
#[test]
fn integration_extra_extension_inlines_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("lib.rs"), "pub fn f() {}\n").unwrap();
    let plain = format_toc(&build_toc(&TocBuilder::new(dir.path()).build()).unwrap());
    assert!(plain.starts_with("- lib.rs\n    (MIME type: "));
    assert!(!plain.contains("pub fn"));
    let options = TocBuilder::new(dir.path())
        .extra_extension(Some("rs".into()))
        .build();
    let inlined = format_toc(&build_toc(&options).unwrap());
    assert_eq!(inlined, "- lib.rs\n    pub fn f() {}");
}
#[test]
fn integration_invalid_utf8_is_dropped() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("mixed.txt"), b"caf\xff\xfee\nok\n").unwrap();
    let toc = build_toc(&TocBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(format_toc(&toc), "- mixed.txt\n    cafe\n    ok");
}
#[test]
fn integration_max_depth() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/inner.txt"), "hidden").unwrap();
    fs::write(dir.path().join("top.txt"), "shown").unwrap();
    let options = TocBuilder::new(dir.path()).max_depth(1).build();
    let out = format_toc(&build_toc(&options).unwrap());
    assert_eq!(out, "# sub\n- top.txt\n    shown");
}
#[test]
fn integration_conflict_aborts_without_output() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "x = 1").unwrap();
    let output = out_dir.path().join("toc");
    for (ext, pattern) in [("py", "py"), ("log", "*log")] {
        let options = TocBuilder::new(dir.path())
            .extra_extension(Some(ext.into()))
            .exclude_patterns(vec![pattern.into()])
            .build();
        let err = generate(&options, &output, OverwritePolicy::Always).unwrap_err();
        assert!(matches!(err, TocError::Conflict { .. }));
        assert!(err.to_string().contains(&format!("extension '{}'", ext)));
    }
    assert!(!out_dir.path().join("toc.md").exists());
}
#[test]
fn integration_extension_checked_as_given() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "x = 1\n").unwrap();
    fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
    for pattern in [".*", "*.py"] {
        let options = TocBuilder::new(dir.path())
            .extra_extension(Some("py".into()))
            .exclude_patterns(vec![pattern.into()])
            .build();
        assert!(validate(&options).is_ok());
    }
    let options = TocBuilder::new(dir.path())
        .extra_extension(Some("py".into()))
        .exclude_patterns(vec![".*".into()])
        .build();
    let out = format_toc(&build_toc(&options).unwrap());
    assert_eq!(out, "- a.py\n    x = 1");
}
#[test]
fn integration_generate_is_idempotent() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();
    fs::write(dir.path().join("docs/guide.md"), "# Guide\n\nText\n").unwrap();
    fs::write(dir.path().join("logo.png"), [137u8, 80, 78, 71]).unwrap();
    let options = TocBuilder::new(dir.path()).build();
    let output = out_dir.path().join("snapshot");
    let first_path = generate(&options, &output, OverwritePolicy::Always).unwrap();
    let first = fs::read(&first_path).unwrap();
    let second_path = generate(&options, &output, OverwritePolicy::Always).unwrap();
    assert_eq!(first_path, second_path);
    assert_eq!(first, fs::read(&second_path).unwrap());
    assert_eq!(
        String::from_utf8(first).unwrap(),
        "# docs\n- guide.md\n    # Guide\n    \n    Text\n- logo.png\n    (MIME type: image/png)"
    );
}
#[test]
fn integration_declined_overwrite_keeps_file() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let target = out_dir.path().join("toc.md");
    fs::write(&target, "previous").unwrap();
    let err = generate(
        &TocBuilder::new(dir.path()).build(),
        &target,
        OverwritePolicy::Never,
    )
    .unwrap_err();
    assert!(matches!(err, TocError::OverwriteDeclined(_)));
    assert_eq!(fs::read_to_string(&target).unwrap(), "previous");
}
#[test]
fn integration_root_must_be_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, "x").unwrap();
    let err = build_toc(&TocBuilder::new(&file).build()).unwrap_err();
    assert!(matches!(err, TocError::InvalidPath(_)));
}
#[cfg(unix)]
#[test]
fn integration_symlinks() {
    use std::os::unix::fs::symlink;
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    fs::write(dir.path().join("real/data.txt"), "data").unwrap();
    symlink(dir.path().join("real"), dir.path().join("zlink")).unwrap();
    symlink(dir.path().join("real/data.txt"), dir.path().join("alias.txt")).unwrap();
    symlink(dir.path().join("missing"), dir.path().join("dangling.txt")).unwrap();
    let followed = format_toc(&build_toc(&TocBuilder::new(dir.path()).build()).unwrap());
    assert_eq!(
        followed,
        "- alias.txt\n    data\n# real\n- data.txt\n    data\n# zlink\n- data.txt\n    data"
    );
    let options = TocBuilder::new(dir.path()).follow_links(false).build();
    let listed = format_toc(&build_toc(&options).unwrap());
    assert_eq!(listed, "- alias.txt\n    data\n# real\n- data.txt\n    data\n# zlink");
}
#[cfg(unix)]
#[test]
fn integration_unreadable_file_aborts_without_output() {
    use std::os::unix::fs::PermissionsExt;
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let secret = dir.path().join("secret.txt");
    fs::write(&secret, "hidden").unwrap();
    fs::set_permissions(&secret, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read(&secret).is_ok() {
        // Running with privileges that bypass file modes.
        return;
    }
    let output = out_dir.path().join("toc");
    let err = generate(
        &TocBuilder::new(dir.path()).build(),
        &output,
        OverwritePolicy::Always,
    )
    .unwrap_err();
    match err {
        TocError::Io { path, .. } => assert_eq!(path, secret),
        other => panic!("unexpected error: {}", other),
    }
    assert!(!out_dir.path().join("toc.md").exists());
}
