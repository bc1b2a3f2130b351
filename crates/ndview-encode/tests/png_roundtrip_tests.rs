//! Integration tests for PNG and HTML output of rendered images.

use base64::Engine as _;
use ndview_core::Image;
use ndview_encode::{PNG_DATA_URI_PREFIX, base64_png, decode_png, encode_png, fingerprint, html_img};
use ndview_mosaic::compose_mosaic;
use ndview_render::display;

fn gradient() -> Image<'static> {
    let data: Vec<u16> = (0..12 * 5).map(|i| i * 100).collect();
    Image::from_vec(&[12, 5], data).expect("image should build")
}

#[test]
fn png_roundtrip_tests_preserves_rendered_pixels() {
    let raster = display(&gradient()).expect("render");
    let png = encode_png(&raster).expect("encode");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = decode_png(&png).expect("decode");
    assert_eq!(decoded, raster);
}

#[test]
fn png_roundtrip_tests_html_embeds_base64_png() {
    let raster = display(&gradient()).expect("render");
    let html = html_img(&raster, Some("cells \"A\" & <B>")).expect("html");

    let prefix = format!("<img src=\"{PNG_DATA_URI_PREFIX}");
    assert!(html.starts_with(&prefix));
    assert!(html.ends_with('>'));
    assert!(html.contains("alt=\"cells &quot;A&quot; &amp; &lt;B&gt;\""));
    assert!(html.contains("title=\"cells &quot;A&quot; &amp; &lt;B&gt;\""));

    let payload_end = html[prefix.len()..].find('"').expect("closing quote") + prefix.len();
    let payload = &html[prefix.len()..payload_end];
    assert_eq!(payload, base64_png(&raster).expect("base64"));

    let png = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .expect("payload should be base64");
    assert_eq!(decode_png(&png).expect("decode"), raster);
}

#[test]
fn png_roundtrip_tests_untitled_html_has_no_attributes() {
    let raster = display(&gradient()).expect("render");
    let html = html_img(&raster, None).expect("html");
    assert!(!html.contains("alt="));
    assert!(!html.contains("title="));
}

#[test]
fn png_roundtrip_tests_fingerprint_is_stable_across_renders() {
    let tile = gradient();
    let tiles = [tile.clone(), tile.clone(), tile];
    let first = display(&compose_mosaic(&[3], &tiles).expect("mosaic")).expect("render");
    let second = display(&compose_mosaic(&[3], &tiles).expect("mosaic")).expect("render");
    assert_eq!(fingerprint(&first), fingerprint(&second));

    let single = display(&tiles[0]).expect("render");
    assert_ne!(fingerprint(&first), fingerprint(&single));
}
