use std::path::{Path, PathBuf};

use gamepage_common::path::{entry_path_in, file_url, ENTRY_DIR, ENTRY_FILE};
use proptest::collection::vec;
use proptest::prelude::*;

fn base_dir() -> impl Strategy<Value = PathBuf> {
    vec("[A-Za-z0-9_-]{1,12}", 0..6).prop_map(|segments| {
        let mut base = std::env::temp_dir();
        base.extend(segments);
        base
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn entry_path_sits_in_webassets_under_base(base in base_dir()) {
        let path = entry_path_in(&base);
        let webassets = base.join(ENTRY_DIR);

        prop_assert!(path.is_absolute());
        prop_assert_eq!(path.parent(), Some(webassets.as_path()));
        prop_assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(ENTRY_FILE));
    }

    #[test]
    fn entry_url_points_back_at_entry_path(base in base_dir()) {
        let path = entry_path_in(&base);
        let url = file_url(&path).expect("absolute entry path converts to a file URL");

        prop_assert_eq!(url.scheme(), "file");
        prop_assert_eq!(url.to_file_path().ok(), Some(path));
    }
}

#[test]
fn resolution_does_not_touch_the_filesystem() {
    let base = Path::new("/definitely/not/a/real/install/dir");
    let path = entry_path_in(base);
    assert!(!path.exists());
    assert!(path.ends_with("Webassets/index.html"));
}
