use std::cmp::Ordering;

use pox_pep440::{Version, VersionParser};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn v(text: &str) -> Version {
    VersionParser::new().parse(text).unwrap()
}

#[test]
fn test_release_phase_chain() {
    init_logger();

    let chain = ["1.0.dev0", "1.0a0", "1.0a1", "1.0b0", "1.0rc0", "1.0", "1.0.post0"];
    for pair in chain.windows(2) {
        assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
    }
}

#[test]
fn test_local_segment_ordering() {
    assert!(v("1.0") < v("1.0+abc"));
    assert!(v("1.0+abc") < v("1.0+1"));
    assert!(v("1.0+1") < v("1.0+2"));
    assert!(v("1.0+2") < v("1.0+1.1"));
    assert!(v("1.0+abc") < v("1.0+abd"));
    assert!(v("1.0+1.abc") < v("1.0+1.1"));
}

#[test]
fn test_long_ordering_chain() {
    let chain = [
        "1.0.dev456",
        "1.0a1",
        "1.0a2.dev456",
        "1.0a12.dev456",
        "1.0a12",
        "1.0b1.dev456",
        "1.0b2",
        "1.0b2.post345.dev456",
        "1.0b2.post345",
        "1.0rc1.dev456",
        "1.0rc1",
        "1.0",
        "1.0+abc.5",
        "1.0+abc.7",
        "1.0+5",
        "1.0.post456.dev34",
        "1.0.post456",
        "1.1.dev1",
        "1!0.1",
    ];

    let versions: Vec<Version> = chain.iter().map(|text| v(text)).collect();
    for (i, a) in versions.iter().enumerate() {
        for (j, b) in versions.iter().enumerate() {
            assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", chain[i], chain[j]);
        }
    }
}

#[test]
fn test_total_order_properties() {
    let samples = [
        "1.0", "1.0.0", "v1.0", "1.0a1", "1.0.post1", "1.0.dev1", "1.0+1", "1.0+a", "2!1.0",
        "1.0a1.post2.dev3", "0.9", "1.0.1", "1.0-1",
    ];
    let versions: Vec<Version> = samples.iter().map(|text| v(text)).collect();

    for a in &versions {
        for b in &versions {
            let forward = a.cmp(b);
            assert_eq!(forward.reverse(), b.cmp(a));
            assert_eq!(forward == Ordering::Equal, a == b);

            for c in &versions {
                if a <= b && b <= c {
                    assert!(a <= c);
                }
            }
        }
    }
}

#[test]
fn test_text_does_not_affect_equality() {
    assert_eq!(v("v1.0"), v("1.0"));
    assert_eq!(v("1.0-1"), v("1.0.post1"));
    assert_eq!(v("1.0ALPHA1"), v("1.0a1"));
    assert_ne!(v("v1.0").text(), v("1.0").text());
}

#[test]
fn test_sorting_a_list() {
    let mut versions = vec![v("1.0"), v("1.0rc1"), v("0.1"), v("1.0.post1"), v("1.0.dev1")];
    versions.sort();
    let texts: Vec<&str> = versions.iter().map(|version| version.text()).collect();
    assert_eq!(texts, vec!["0.1", "1.0.dev1", "1.0rc1", "1.0", "1.0.post1"]);
}

#[test]
fn test_bumping() {
    assert_eq!(v("1.2.3").next_major().text(), "2.0.0");
    assert_eq!(v("2.0.0a1").next_major().text(), "2.0.0");
    assert_eq!(v("1.0").next_prerelease(false).text(), "1.0-a0");
    assert_eq!(v("1.0a0").next_prerelease(true).text(), "1.0-b0");
    assert_eq!(v("1.0a0").next_prerelease(false).text(), "1.0-a1");
}
