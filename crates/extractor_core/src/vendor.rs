//! Vendor-specific gallery rewrites that swap thumbnail URLs for larger variants.

use extractor_logging::extractor_warn;

/// Size token requested from the Amazon image CDN.
pub const AMAZON_SIZE_TOKEN: &str = "SX569";
const FLIPKART_THUMBNAIL_SEGMENT: &str = "/128/128/";
const FLIPKART_FULL_SEGMENT: &str = "/832/832/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Amazon,
    Flipkart,
    Generic,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RewriteError {
    #[error("no size token between underscores in {url}")]
    MissingSizeToken { url: String },
}

impl Vendor {
    /// Pick the vendor from the product page URL the user submitted.
    pub fn detect(page_url: &str) -> Self {
        if page_url.contains("amazon.in") || page_url.contains("amazon.com") {
            Vendor::Amazon
        } else if page_url.contains("flipkart.com") {
            Vendor::Flipkart
        } else {
            Vendor::Generic
        }
    }

    pub fn rewrite(self, image_url: &str) -> Result<String, RewriteError> {
        match self {
            Vendor::Amazon => rewrite_amazon(image_url),
            Vendor::Flipkart => Ok(image_url.replacen(
                FLIPKART_THUMBNAIL_SEGMENT,
                FLIPKART_FULL_SEGMENT,
                1,
            )),
            Vendor::Generic => Ok(image_url.to_owned()),
        }
    }

    /// Rewrite every gallery entry independently. An entry that cannot be
    /// rewritten is kept as received.
    pub fn rewrite_gallery(self, gallery: &[String]) -> Vec<String> {
        gallery
            .iter()
            .map(|url| match self.rewrite(url) {
                Ok(rewritten) => rewritten,
                Err(err) => {
                    extractor_warn!("Keeping gallery image unchanged: {}", err);
                    url.clone()
                }
            })
            .collect()
    }
}

/// Replace the text strictly between the first and last underscore of the
/// file name, e.g. `71ABCxyz._SY88_.jpg` -> `71ABCxyz._SX569_.jpg`.
/// Any `?query` or `#fragment` is carried over untouched.
fn rewrite_amazon(url: &str) -> Result<String, RewriteError> {
    let path_end = url.find(['?', '#']).unwrap_or(url.len());
    let name_start = url[..path_end].rfind('/').map_or(0, |idx| idx + 1);
    let file_name = &url[name_start..path_end];
    match (file_name.find('_'), file_name.rfind('_')) {
        (Some(first), Some(last)) if first < last => {
            let first = name_start + first;
            let last = name_start + last;
            Ok(format!(
                "{}{}{}",
                &url[..=first],
                AMAZON_SIZE_TOKEN,
                &url[last..]
            ))
        }
        _ => Err(RewriteError::MissingSizeToken {
            url: url.to_owned(),
        }),
    }
}
