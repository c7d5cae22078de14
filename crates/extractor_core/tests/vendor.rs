use extractor_core::{RewriteError, Vendor};

#[test]
fn detects_vendor_from_page_url() {
    assert_eq!(Vendor::detect("https://www.amazon.in/dp/B0C"), Vendor::Amazon);
    assert_eq!(Vendor::detect("https://www.amazon.com/dp/B0C"), Vendor::Amazon);
    assert_eq!(
        Vendor::detect("https://www.flipkart.com/shirt/p/itm1"),
        Vendor::Flipkart
    );
    assert_eq!(Vendor::detect("https://shop.example/item"), Vendor::Generic);
}

#[test]
fn amazon_replaces_size_token() {
    let url = "https://m.media-amazon.com/images/I/71ABCxyz_SY88_.jpg";
    assert_eq!(
        Vendor::Amazon.rewrite(url).unwrap(),
        "https://m.media-amazon.com/images/I/71ABCxyz_SX569_.jpg"
    );
}

#[test]
fn amazon_replaces_everything_between_first_and_last_underscore() {
    let url = "https://m.media-amazon.com/images/I/71abc._AC_SX38_SY50_CR,0,0,38,50_.jpg";
    assert_eq!(
        Vendor::Amazon.rewrite(url).unwrap(),
        "https://m.media-amazon.com/images/I/71abc._SX569_.jpg"
    );
}

#[test]
fn amazon_only_looks_at_the_file_name() {
    let url = "https://cdn.example/some_dir/other_dir/71abc._SY88_.jpg";
    assert_eq!(
        Vendor::Amazon.rewrite(url).unwrap(),
        "https://cdn.example/some_dir/other_dir/71abc._SX569_.jpg"
    );
}

#[test]
fn amazon_ignores_underscores_in_query_and_fragment() {
    assert_eq!(
        Vendor::Amazon
            .rewrite("https://m.media-amazon.com/images/I/71abc._SY88_.jpg?x=a_b")
            .unwrap(),
        "https://m.media-amazon.com/images/I/71abc._SX569_.jpg?x=a_b"
    );
    assert_eq!(
        Vendor::Amazon
            .rewrite("https://m.media-amazon.com/images/I/71abc._SY88_.jpg#top_of_page")
            .unwrap(),
        "https://m.media-amazon.com/images/I/71abc._SX569_.jpg#top_of_page"
    );
    assert!(Vendor::Amazon
        .rewrite("https://m.media-amazon.com/images/I/71abc.jpg?a_b_c")
        .is_err());
}

#[test]
fn amazon_without_two_underscores_is_an_error() {
    let url = "https://m.media-amazon.com/images/I/71abc_.jpg";
    assert_eq!(
        Vendor::Amazon.rewrite(url),
        Err(RewriteError::MissingSizeToken {
            url: url.to_string()
        })
    );
    assert!(Vendor::Amazon
        .rewrite("https://m.media-amazon.com/images/I/71abc.jpg")
        .is_err());
}

#[test]
fn flipkart_upgrades_thumbnail_segment() {
    let url = "https://img.flipkart.com/image/shirt/x/y/128/128/abc.jpg";
    assert_eq!(
        Vendor::Flipkart.rewrite(url).unwrap(),
        "https://img.flipkart.com/image/shirt/x/y/832/832/abc.jpg"
    );
}

#[test]
fn flipkart_without_segment_is_unchanged() {
    let url = "https://img.flipkart.com/image/shirt/x/y/416/416/abc.jpg";
    assert_eq!(Vendor::Flipkart.rewrite(url).unwrap(), url);
}

#[test]
fn generic_passes_through() {
    let url = "https://cdn.example/a_b_c/128/128/x.jpg";
    assert_eq!(Vendor::Generic.rewrite(url).unwrap(), url);
}

#[test]
fn gallery_keeps_bad_entries_and_rewrites_the_rest() {
    extractor_logging::initialize_for_tests();
    let gallery = vec![
        "https://m.media-amazon.com/images/I/one._SY88_.jpg".to_string(),
        "https://m.media-amazon.com/images/I/broken.jpg".to_string(),
        "https://m.media-amazon.com/images/I/two._SS40_.jpg".to_string(),
    ];

    let rewritten = Vendor::Amazon.rewrite_gallery(&gallery);

    assert_eq!(
        rewritten,
        vec![
            "https://m.media-amazon.com/images/I/one._SX569_.jpg".to_string(),
            "https://m.media-amazon.com/images/I/broken.jpg".to_string(),
            "https://m.media-amazon.com/images/I/two._SX569_.jpg".to_string(),
        ]
    );
}
