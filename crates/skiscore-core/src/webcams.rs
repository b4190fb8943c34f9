//! Static catalogue of resort webcams.

use serde::{Deserialize, Serialize};

/// How a webcam stream is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamType {
    Image,
    YouTube,
    VideoMp4,
}

impl StreamType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::YouTube => "youtube",
            Self::VideoMp4 => "mp4",
        }
    }
}

/// A webcam with its stream and optional preview image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webcam {
    pub name: String,
    pub stream_url: String,
    pub stream_type: StreamType,
    pub thumbnail_url: Option<String>,
}

impl Webcam {
    /// Build a webcam, deriving a thumbnail for YouTube streams.
    pub fn new(name: impl Into<String>, stream_url: impl Into<String>, stream_type: StreamType) -> Self {
        let stream_url = stream_url.into();
        let thumbnail_url = match stream_type {
            StreamType::YouTube => youtube_video_id(&stream_url).map(|id| youtube_thumbnail(&id)),
            StreamType::Image | StreamType::VideoMp4 => None,
        };
        Self {
            name: name.into(),
            stream_url,
            stream_type,
            thumbnail_url,
        }
    }

    /// Preview image: the thumbnail when known, otherwise the stream itself.
    #[must_use]
    pub fn image_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.stream_url)
    }
}

/// Extract the video id from a `youtu.be/<id>` or `...?v=<id>` URL.
#[must_use]
pub fn youtube_video_id(url: &str) -> Option<String> {
    let id = if url.contains("youtu.be/") {
        let tail = url.rsplit('/').next()?;
        tail.split('?').next()?
    } else if let Some((_, rest)) = url.split_once("v=") {
        rest.split('&').next()?
    } else {
        return None;
    };
    (!id.is_empty()).then(|| id.to_string())
}

#[must_use]
pub fn youtube_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

struct CatalogueEntry {
    keyword: &'static str,
    name: &'static str,
    url: &'static str,
    stream_type: StreamType,
}

const CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry {
        keyword: "livigno",
        name: "Livigno Live",
        url: "https://sts004.feratel.co.at/streams/stsstore002/1/06172_69973f57-5a1cVid.mp4?dcsdesign=feratel4",
        stream_type: StreamType::VideoMp4,
    },
    CatalogueEntry {
        keyword: "roccaraso",
        name: "Roccaraso Live",
        url: "https://youtu.be/l9-M4s_7lKg",
        stream_type: StreamType::YouTube,
    },
    CatalogueEntry {
        keyword: "ortisei",
        name: "Ortisei Live",
        url: "https://youtu.be/_CAoxRHQsDA",
        stream_type: StreamType::YouTube,
    },
    CatalogueEntry {
        keyword: "cortina",
        name: "Cortina d'Ampezzo Live",
        url: "https://sts002.feratel.co.at/streams/stsstore001/1/06290_69973f1b-71f4Vid.mp4?dcsdesign=feratel4",
        stream_type: StreamType::VideoMp4,
    },
    CatalogueEntry {
        keyword: "corvara",
        name: "Corvara Live",
        url: "https://sts003.feratel.co.at/streams/stsstore001/1/06321_69973fbf-9e77Vid.mp4?dcsdesign=feratel4",
        stream_type: StreamType::VideoMp4,
    },
    CatalogueEntry {
        keyword: "colfosco",
        name: "Colfosco Live",
        url: "https://sts064.feratel.co.at/streams/stsstore053/1/06322_69973fce-ebdaVid.mp4?dcsdesign=feratel4",
        stream_type: StreamType::VideoMp4,
    },
];

/// Keywords in catalogue order.
pub fn known_keywords() -> impl Iterator<Item = &'static str> {
    CATALOGUE.iter().map(|e| e.keyword)
}

/// Webcams for a resort, matched by keyword contained in its name.
///
/// The first keyword found wins; an unknown resort yields an empty list.
#[must_use]
pub fn webcams_for_resort(resort_name: &str) -> Vec<Webcam> {
    let lowered = resort_name.to_lowercase();
    CATALOGUE
        .iter()
        .find(|entry| lowered.contains(entry.keyword))
        .map(|entry| vec![Webcam::new(entry.name, entry.url, entry.stream_type)])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_id_from_short_link() {
        assert_eq!(youtube_video_id("https://youtu.be/l9-M4s_7lKg").as_deref(), Some("l9-M4s_7lKg"));
        assert_eq!(
            youtube_video_id("https://youtu.be/abc123?si=tracking").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn youtube_id_from_watch_link() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=xyz789&t=42").as_deref(),
            Some("xyz789")
        );
        assert_eq!(youtube_video_id("https://example.com/cam.jpg"), None);
        assert_eq!(youtube_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn youtube_webcam_has_thumbnail() {
        let cams = webcams_for_resort("Roccaraso, Abruzzo, Italia");
        assert_eq!(cams.len(), 1);
        assert_eq!(cams[0].stream_type, StreamType::YouTube);
        assert_eq!(cams[0].image_url(), "https://img.youtube.com/vi/l9-M4s_7lKg/hqdefault.jpg");
    }

    #[test]
    fn mp4_webcam_falls_back_to_stream_url() {
        let cams = webcams_for_resort("LIVIGNO");
        assert_eq!(cams[0].name, "Livigno Live");
        assert!(cams[0].thumbnail_url.is_none());
        assert_eq!(cams[0].image_url(), cams[0].stream_url);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let cams = webcams_for_resort("Cortina d'Ampezzo, Veneto, Italia");
        assert_eq!(cams[0].name, "Cortina d'Ampezzo Live");
    }

    #[test]
    fn unknown_resort_has_no_webcams() {
        assert!(webcams_for_resort("Sestriere").is_empty());
    }

    #[test]
    fn catalogue_order_is_preserved() {
        let keywords: Vec<_> = known_keywords().collect();
        assert_eq!(keywords, ["livigno", "roccaraso", "ortisei", "cortina", "corvara", "colfosco"]);
    }
}
