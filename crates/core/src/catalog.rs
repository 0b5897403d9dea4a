//! Built-in demo catalog used by the seeding endpoint.
//!
//! Fixed sample records for a fresh deployment. The seed procedure in
//! `creatorhub-db` inserts whichever of these are not already present,
//! keyed on segment slug / creator handle.

use crate::creator::Creator;
use crate::segment::Segment;

fn segment(name: &str, slug: &str, description: &str, color: &str) -> Segment {
    Segment {
        name: name.into(),
        slug: slug.into(),
        description: Some(description.into()),
        cover_image: None,
        color: Some(color.into()),
    }
}

/// The four demo segments.
pub fn segment_catalog() -> Vec<Segment> {
    vec![
        segment("Technology", "technology", "Tech reviews, coding, gadgets", "#60A5FA"),
        segment("Gaming", "gaming", "Let's plays, esports, streaming", "#A78BFA"),
        segment("Lifestyle", "lifestyle", "Wellness, productivity, daily vlogs", "#34D399"),
        segment("Education", "education", "Explainers, tutorials, lectures", "#F59E0B"),
    ]
}

/// The four demo creators.
pub fn creator_catalog() -> Vec<Creator> {
    vec![
        Creator {
            name: "TechNova".into(),
            handle: Some("technova".into()),
            platforms: vec!["YouTube".into(), "X".into(), "TikTok".into()],
            avatar_url: Some("https://i.pravatar.cc/150?img=11".into()),
            banner_url: None,
            bio: Some("Deep dives into emerging tech.".into()),
            segments: vec!["technology".into()],
            location: None,
            languages: vec![],
            website: None,
            followers: 1_200_000,
            rating: 4.7,
            verified: true,
        },
        Creator {
            name: "GamePulse".into(),
            handle: Some("gamepulse".into()),
            platforms: vec!["Twitch".into(), "YouTube".into()],
            avatar_url: Some("https://i.pravatar.cc/150?img=12".into()),
            banner_url: None,
            bio: Some("Strategy breakdowns and chill streams.".into()),
            segments: vec!["gaming".into()],
            location: None,
            languages: vec![],
            website: None,
            followers: 860_000,
            rating: 4.5,
            verified: true,
        },
        Creator {
            name: "DailyFlow".into(),
            handle: Some("dailyflow".into()),
            platforms: vec!["Instagram".into(), "YouTube".into()],
            avatar_url: Some("https://i.pravatar.cc/150?img=13".into()),
            banner_url: None,
            bio: Some("Wellness routines that actually stick.".into()),
            segments: vec!["lifestyle".into()],
            location: None,
            languages: vec![],
            website: None,
            followers: 430_000,
            rating: 4.3,
            verified: false,
        },
        Creator {
            name: "ProfLearn".into(),
            handle: Some("proflearn".into()),
            platforms: vec!["YouTube".into(), "Udemy".into()],
            avatar_url: Some("https://i.pravatar.cc/150?img=14".into()),
            banner_url: None,
            bio: Some("Clear, concise CS courses.".into()),
            segments: vec!["education".into(), "technology".into()],
            location: None,
            languages: vec![],
            website: None,
            followers: 650_000,
            rating: 4.8,
            verified: true,
        },
    ]
}
