//! Featured verse rotation.
//!
//! Wall-clock time is cut into fixed three-hour windows; each window maps to
//! one entry of [`FEATURED_VERSES`]. Selection is a pure function of the
//! timestamp, so every caller inside the same window sees the same verse.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{FeaturedVerse, Theme};

/// Width of one rotation window.
pub const ROTATION_WINDOW_MS: i64 = 3 * 60 * 60 * 1000;

pub const FEATURED_VERSES: [FeaturedVerse; 10] = [
    FeaturedVerse {
        reference: "John 6:29",
        text: "Jesus answered, 'The work of God is this: to believe in the one he has sent.'",
        theme: Theme::Salvation,
    },
    FeaturedVerse {
        reference: "John 3:16",
        text: "For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.",
        theme: Theme::Love,
    },
    FeaturedVerse {
        reference: "Romans 5:8",
        text: "But God demonstrates his own love for us in this: While we were still sinners, Christ died for us.",
        theme: Theme::Love,
    },
    FeaturedVerse {
        reference: "Ephesians 2:8-9",
        text: "For it is by grace you have been saved, through faith—and this is not from yourselves, it is the gift of God—not by works, so that no one can boast.",
        theme: Theme::Grace,
    },
    FeaturedVerse {
        reference: "1 John 4:9",
        text: "This is how God showed his love among us: He sent his one and only Son into the world that we might live through him.",
        theme: Theme::Love,
    },
    FeaturedVerse {
        reference: "Romans 8:1",
        text: "Therefore, there is now no condemnation for those who are in Christ Jesus.",
        theme: Theme::Redemption,
    },
    FeaturedVerse {
        reference: "Lamentations 3:22-23",
        text: "Because of the Lord's great love we are not consumed, for his compassions never fail. They are new every morning; great is your faithfulness.",
        theme: Theme::Mercy,
    },
    FeaturedVerse {
        reference: "John 14:6",
        text: "Jesus answered, 'I am the way and the truth and the life. No one comes to the Father except through me.'",
        theme: Theme::Salvation,
    },
    FeaturedVerse {
        reference: "Romans 10:9",
        text: "If you declare with your mouth, 'Jesus is Lord,' and believe in your heart that God raised him from the dead, you will be saved.",
        theme: Theme::Salvation,
    },
    FeaturedVerse {
        reference: "1 Peter 5:7",
        text: "Cast all your anxiety on him because he cares for you.",
        theme: Theme::Love,
    },
];

/// Index into [`FEATURED_VERSES`] for a Unix timestamp in milliseconds.
pub fn featured_index(epoch_ms: i64) -> usize {
    let window = epoch_ms.div_euclid(ROTATION_WINDOW_MS);
    window.rem_euclid(FEATURED_VERSES.len() as i64) as usize
}

pub fn featured_at(at: DateTime<Utc>) -> &'static FeaturedVerse {
    &FEATURED_VERSES[featured_index(at.timestamp_millis())]
}

pub fn current_featured() -> &'static FeaturedVerse {
    featured_at(Utc::now())
}

/// Start of the window following the one containing `now`.
pub fn next_rotation_at(now: DateTime<Utc>) -> DateTime<Utc> {
    let window = now.timestamp_millis().div_euclid(ROTATION_WINDOW_MS);
    Utc.timestamp_millis_opt((window + 1) * ROTATION_WINDOW_MS)
        .single()
        .unwrap_or(now)
}
