use tessel_matrix::{MatrixError, Platform, PlatformCaps, build};

fn shards(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_build_partitions_each_platform_by_its_cap() {
    let selected = shards(&["a", "b", "c", "d"]);
    let matrix = build(&selected, &PlatformCaps::default()).unwrap();

    // linux cap 3 -> groups of 2/1/1; macos and windows cap 2 -> 2/2.
    let linux: Vec<&str> = matrix
        .groups
        .iter()
        .filter(|g| g.platform == Platform::Linux)
        .map(|g| g.shards.as_str())
        .collect();
    assert_eq!(linux, vec!["a b", "c", "d"]);

    let macos: Vec<&str> = matrix
        .groups
        .iter()
        .filter(|g| g.platform == Platform::Macos)
        .map(|g| g.shards.as_str())
        .collect();
    assert_eq!(macos, vec!["a b", "c d"]);
}

#[test]
fn test_build_emits_platforms_in_fixed_order() {
    let matrix = build(&shards(&["a"]), &PlatformCaps::default()).unwrap();
    let order: Vec<Platform> = matrix.groups.iter().map(|g| g.platform).collect();
    assert_eq!(
        order,
        vec![Platform::Linux, Platform::Macos, Platform::Windows]
    );
}

#[test]
fn test_group_names_embed_index_and_total() {
    let matrix = build(&shards(&["a", "b", "c"]), &PlatformCaps::default()).unwrap();

    let linux_names: Vec<&str> = matrix
        .groups
        .iter()
        .filter(|g| g.platform == Platform::Linux)
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(
        linux_names,
        vec!["ubuntu-tests-1-of-3", "ubuntu-tests-2-of-3", "ubuntu-tests-3-of-3"]
    );

    let macos_names: Vec<&str> = matrix
        .groups
        .iter()
        .filter(|g| g.platform == Platform::Macos)
        .map(|g| g.name.as_str())
        .collect();
    assert_eq!(macos_names, vec!["macos-tests-1-of-2", "macos-tests-2-of-2"]);
}

#[test]
fn test_coverage_flag_follows_platform_setting() {
    let mut caps = PlatformCaps::default();
    caps.set_coverage(Platform::Macos, true);

    let matrix = build(&shards(&["a"]), &caps).unwrap();
    for group in &matrix.groups {
        let expected = matches!(group.platform, Platform::Linux | Platform::Macos);
        assert_eq!(group.coverage, expected);
    }
}

#[test]
fn test_timeouts_come_from_platform_table() {
    let matrix = build(&shards(&["a"]), &PlatformCaps::default()).unwrap();

    for group in &matrix.groups {
        let timeouts = group.platform.timeouts();
        assert_eq!(group.runner_timeout_minutes, timeouts.runner_minutes);
        assert_eq!(group.test_timeout_minutes, timeouts.test_minutes);
    }
}

#[test]
fn test_cache_key_tracks_member_list() {
    let a = build(&shards(&["a", "b"]), &PlatformCaps::default()).unwrap();
    let b = build(&shards(&["a", "b"]), &PlatformCaps::default()).unwrap();
    assert_eq!(a.groups[0].cache_key, b.groups[0].cache_key);

    let c = build(&shards(&["a", "c"]), &PlatformCaps::default()).unwrap();
    assert_ne!(a.groups[0].cache_key, c.groups[0].cache_key);
}

#[test]
fn test_coverage_reports_one_per_selected_shard() {
    let matrix = build(&shards(&["api", "cli"]), &PlatformCaps::default()).unwrap();
    assert_eq!(
        matrix.coverage_reports,
        vec![
            "./coverage-reports/api.json",
            "./coverage-reports/cli.json"
        ]
    );
}

#[test]
fn test_empty_selection_signals_skip() {
    let matrix = build(&[], &PlatformCaps::default()).unwrap();
    assert!(matrix.skip);
    assert!(matrix.groups.is_empty());
    assert!(matrix.coverage_reports.is_empty());
}

#[test]
fn test_zero_capacity_propagates() {
    let mut caps = PlatformCaps::default();
    caps.set_max_runners(Platform::Windows, 0);

    let err = build(&shards(&["a"]), &caps).unwrap_err();
    assert!(matches!(err, MatrixError::InvalidCapacity));
}

#[test]
fn test_matrix_serializes_kebab_case() {
    let matrix = build(&shards(&["a"]), &PlatformCaps::default()).unwrap();
    let json = serde_json::to_string(&matrix.groups[0]).unwrap();
    assert!(json.contains(r#""cache-key":"#));
    assert!(json.contains(r#""platform":"linux""#));
}
