//! The sample content shipped with the app
//!
//! Event times are offsets from the `now` passed in, so the data always
//! describes the coming days.

use crate::catalog::{CatalogData, ContentCatalog};
use crate::error::CatalogResult;
use jaigurudev_config::CatalogConfig;
use jaigurudev_core::{Book, Duration, Event, Music, Timestamp, Video};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Sample catalog with default query settings
pub fn sample_catalog(now: Timestamp) -> CatalogResult<ContentCatalog> {
    ContentCatalog::new(sample_data(now), CatalogConfig::default())
}

pub fn sample_data(now: Timestamp) -> CatalogData {
    CatalogData {
        videos: sample_videos(),
        music: sample_music(),
        books: sample_books(),
        events: sample_events(now),
    }
}

pub fn sample_videos() -> Vec<Video> {
    vec![
        Video {
            description: "Detailed explanation of the first chapter of Bhagavad Gita with Sanskrit verses and Hindi translation".into(),
            duration: "1:45:30".into(),
            views: "125K".into(),
            upload_date: "2 days ago".into(),
            thumbnail_url: "https://example.com/gita_ch1_thumb.jpg".into(),
            video_url: "https://example.com/gita_ch1_video.mp4".into(),
            quality: "4K".into(),
            rating: 4.9,
            likes: 5420,
            comments: 234,
            tags: strings(&["Bhagavad Gita", "Krishna", "Arjuna", "Dharma", "Sanskrit"]),
            ..Video::new(
                "v001",
                "Bhagavad Gita Chapter 1 - Complete Explanation",
                "Gurudev Spiritual Academy",
                "Satsang",
            )
        },
        Video {
            description: "Start your day with peace and tranquility through this guided meditation session".into(),
            duration: "30:00".into(),
            views: "89K".into(),
            upload_date: "1 week ago".into(),
            thumbnail_url: "https://example.com/meditation_thumb.jpg".into(),
            video_url: "https://example.com/meditation_video.mp4".into(),
            language: "English".into(),
            rating: 4.8,
            likes: 3210,
            comments: 156,
            tags: strings(&["Meditation", "Morning", "Guided", "Peace", "Mindfulness"]),
            ..Video::new(
                "v002",
                "Morning Meditation - 30 Minutes Guided Session",
                "Meditation Masters",
                "Meditation",
            )
        },
        Video {
            description: "Beautiful recitation of Hanuman Chalisa with word-by-word meaning and significance".into(),
            duration: "15:45".into(),
            views: "234K".into(),
            upload_date: "3 days ago".into(),
            thumbnail_url: "https://example.com/hanuman_thumb.jpg".into(),
            video_url: "https://example.com/hanuman_video.mp4".into(),
            rating: 4.9,
            likes: 8765,
            comments: 432,
            tags: strings(&["Hanuman", "Chalisa", "Devotional", "Prayer", "Protection"]),
            ..Video::new(
                "v003",
                "Hanuman Chalisa - Complete Recitation with Meaning",
                "Divine Chants",
                "Devotional",
            )
        },
        Video {
            description: "Live interactive session answering spiritual questions from devotees worldwide".into(),
            duration: "LIVE".into(),
            views: "1.2K".into(),
            upload_date: "Live now".into(),
            thumbnail_url: "https://example.com/live_satsang_thumb.jpg".into(),
            video_url: "https://example.com/live_satsang_stream.m3u8".into(),
            is_live: true,
            rating: 4.7,
            likes: 456,
            comments: 89,
            tags: strings(&["Live", "Satsang", "Q&A", "Interactive", "Wisdom"]),
            ..Video::new(
                "v004",
                "Live Satsang - Questions and Answers",
                "Spiritual Wisdom Channel",
                "Satsang",
            )
        },
        Video {
            description: "Beautiful animated stories from Ramayana explained in simple language for children".into(),
            duration: "25:30".into(),
            views: "156K".into(),
            upload_date: "5 days ago".into(),
            thumbnail_url: "https://example.com/ramayana_kids_thumb.jpg".into(),
            video_url: "https://example.com/ramayana_kids_video.mp4".into(),
            rating: 4.8,
            likes: 4567,
            comments: 234,
            tags: strings(&["Ramayana", "Children", "Stories", "Animation", "Values"]),
            ..Video::new(
                "v005",
                "Ramayana Stories for Children",
                "Kids Spiritual Stories",
                "Stories",
            )
        },
    ]
}

pub fn sample_music() -> Vec<Music> {
    vec![
        Music {
            album: "Sacred Mantras Vol 1".into(),
            duration: "27:30".into(),
            audio_url: "https://example.com/om_namah_shivaya.mp3".into(),
            thumbnail_url: "https://example.com/om_namah_thumb.jpg".into(),
            lyrics: "Om Namah Shivaya Om Namah Shivaya Om Namah Shivaya...".into(),
            rating: 4.9,
            play_count: 45230,
            tags: strings(&["Shiva", "Mantra", "108", "Sacred", "Meditation"]),
            ..Music::new(
                "m001",
                "Om Namah Shivaya - 108 Times",
                "Divine Chants Orchestra",
                "Mantras",
            )
        },
        Music {
            album: "Vedic Chants".into(),
            duration: "8:15".into(),
            audio_url: "https://example.com/gayatri_mantra.mp3".into(),
            thumbnail_url: "https://example.com/gayatri_thumb.jpg".into(),
            lyrics: "Om bhur bhuva swaha, Tat savitur varenyam...".into(),
            rating: 4.8,
            play_count: 32145,
            release_year: 2023,
            tags: strings(&["Gayatri", "Vedic", "Sacred", "Morning", "Wisdom"]),
            ..Music::new(
                "m002",
                "Gayatri Mantra - Traditional",
                "Sanskrit Scholars",
                "Mantras",
            )
        },
        Music {
            album: "Krishna Love Songs".into(),
            duration: "12:45".into(),
            audio_url: "https://example.com/krishna_bhajan.mp3".into(),
            thumbnail_url: "https://example.com/krishna_thumb.jpg".into(),
            language: "Hindi".into(),
            lyrics: "Radhe Krishna, Radhe Krishna, Krishna Krishna Radhe Radhe...".into(),
            rating: 4.9,
            play_count: 67890,
            tags: strings(&["Krishna", "Radha", "Bhajan", "Love", "Devotion"]),
            ..Music::new(
                "m003",
                "Krishna Bhajan Medley",
                "Devotional Singers",
                "Devotional",
            )
        },
        Music {
            album: "Inner Peace Collection".into(),
            duration: "15:00".into(),
            audio_url: "https://example.com/shanti_mantra.mp3".into(),
            thumbnail_url: "https://example.com/shanti_thumb.jpg".into(),
            lyrics: "Om shanti shanti shanti...".into(),
            rating: 4.7,
            play_count: 23456,
            tags: strings(&["Peace", "Shanti", "Calm", "Meditation", "Healing"]),
            ..Music::new(
                "m004",
                "Shanti Mantra - Peace Chant",
                "Peaceful Hearts",
                "Meditation",
            )
        },
        Music {
            album: "Daily Aarti Collection".into(),
            duration: "18:30".into(),
            audio_url: "https://example.com/aarti_sangrah.mp3".into(),
            thumbnail_url: "https://example.com/aarti_thumb.jpg".into(),
            language: "Hindi".into(),
            lyrics: "Om Jai Jagdish Hare, Swami Jai Jagdish Hare...".into(),
            rating: 4.8,
            play_count: 54321,
            release_year: 2023,
            tags: strings(&["Aarti", "Evening", "Prayer", "Temple", "Devotion"]),
            ..Music::new(
                "m005",
                "Aarti Sangrah - Evening Prayers",
                "Temple Singers",
                "Prayers",
            )
        },
    ]
}

pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            description: "The eternal dialogue between Lord Krishna and Arjuna with detailed commentary and explanations".into(),
            rating: 4.9,
            cover_image_url: "https://example.com/bhagavad_gita_cover.jpg".into(),
            pdf_url: "https://example.com/bhagavad_gita.pdf".into(),
            publisher: "Spiritual Publications".into(),
            isbn: "978-93-123456-01-1".into(),
            read_time: "45 days".into(),
            chapters: strings(&[
                "Arjuna Vishada Yoga",
                "Sankhya Yoga",
                "Karma Yoga",
                "Jnana Karma Sanyasa Yoga",
                "Karma Sanyasa Yoga",
                "Atmasamyama Yoga",
                "Paramahamsa Vijnana Yoga",
                "Akshara Parabrahma Yoga",
                "Rajavidya Rajaguhya Yoga",
                "Vibhuti Yoga",
                "Vishvarupa Darshana Yoga",
                "Bhakti Yoga",
                "Kshetra Kshetrajna Vibhaga Yoga",
                "Gunatraya Vibhaga Yoga",
                "Purushottama Yoga",
                "Daivasura Sampad Vibhaga Yoga",
                "Shraddhatraya Vibhaga Yoga",
                "Moksha Sanyasa Yoga",
            ]),
            tags: strings(&["Krishna", "Arjuna", "Dharma", "Yoga", "Philosophy", "Vedic"]),
            ..Book::new(
                "b001",
                "Bhagavad Gita - Complete with Commentary",
                "Vyasa Maharshi",
                "Scriptures",
                1200,
            )
        },
        Book {
            description: "The complete story of Lord Rama's life, His exile, and the victory of good over evil".into(),
            rating: 4.8,
            cover_image_url: "https://example.com/ramayana_cover.jpg".into(),
            pdf_url: "https://example.com/ramayana.pdf".into(),
            publish_year: 2023,
            publisher: "Sacred Texts Publishers".into(),
            isbn: "978-93-123456-02-2".into(),
            read_time: "35 days".into(),
            chapters: strings(&[
                "Bala Kanda",
                "Ayodhya Kanda",
                "Aranya Kanda",
                "Kishkindha Kanda",
                "Sundara Kanda",
                "Yuddha Kanda",
                "Uttara Kanda",
            ]),
            tags: strings(&["Rama", "Sita", "Hanuman", "Dharma", "Epic", "Values"]),
            ..Book::new(
                "b002",
                "Ramayana - The Epic Journey",
                "Maharshi Valmiki",
                "Scriptures",
                950,
            )
        },
        Book {
            description: "Complete guide to meditation techniques, breathing exercises, and achieving inner peace".into(),
            rating: 4.7,
            cover_image_url: "https://example.com/meditation_guide_cover.jpg".into(),
            pdf_url: "https://example.com/meditation_guide.pdf".into(),
            language: "English".into(),
            publisher: "Mindful Living Publications".into(),
            isbn: "978-93-123456-03-3".into(),
            read_time: "12 days".into(),
            chapters: strings(&[
                "Understanding Meditation",
                "Breathing Techniques",
                "Postures and Environment",
                "Mindfulness Practice",
                "Concentration Methods",
                "Advanced Techniques",
                "Daily Practice",
                "Overcoming Obstacles",
                "Benefits of Meditation",
            ]),
            tags: strings(&["Meditation", "Mindfulness", "Peace", "Practice", "Beginner"]),
            ..Book::new(
                "b003",
                "Meditation for Beginners",
                "Spiritual Guide Anand",
                "Practice",
                280,
            )
        },
        Book {
            description: "Collection of the most powerful mantras with their meanings, pronunciation, and benefits".into(),
            rating: 4.8,
            cover_image_url: "https://example.com/mantras_cover.jpg".into(),
            pdf_url: "https://example.com/sacred_mantras.pdf".into(),
            language: "Sanskrit".into(),
            publisher: "Vedic Wisdom Press".into(),
            isbn: "978-93-123456-04-4".into(),
            read_time: "20 days".into(),
            chapters: strings(&[
                "Introduction to Mantras",
                "Ganesh Mantras",
                "Shiva Mantras",
                "Vishnu Mantras",
                "Devi Mantras",
                "Healing Mantras",
                "Protection Mantras",
                "Prosperity Mantras",
                "Peace Mantras",
                "Daily Mantras",
            ]),
            tags: strings(&["Mantras", "Sanskrit", "Sacred", "Healing", "Protection"]),
            ..Book::new(
                "b004",
                "108 Sacred Mantras",
                "Pandit Vedic Sharma",
                "Mantras",
                350,
            )
        },
        Book {
            description: "Beautiful collection of moral and spiritual stories to inspire young minds".into(),
            rating: 4.9,
            cover_image_url: "https://example.com/kids_stories_cover.jpg".into(),
            pdf_url: "https://example.com/spiritual_stories_kids.pdf".into(),
            publisher: "Children's Spiritual Books".into(),
            isbn: "978-93-123456-05-5".into(),
            read_time: "8 days".into(),
            chapters: strings(&[
                "The Honest Woodcutter",
                "The Devoted Bhakt",
                "The Wise Elephant",
                "The Magical Tree",
                "The Kind Princess",
                "The Brave Little Monk",
                "The Generous Farmer",
                "The Learning Bird",
                "The Peaceful Village",
            ]),
            tags: strings(&["Children", "Stories", "Moral", "Values", "Learning"]),
            ..Book::new(
                "b005",
                "Spiritual Stories for Children",
                "Grandma Gita",
                "Stories",
                180,
            )
        },
        Book {
            description: "The foundational text of yoga philosophy with detailed commentary and practical applications".into(),
            rating: 4.8,
            cover_image_url: "https://example.com/yoga_sutras_cover.jpg".into(),
            pdf_url: "https://example.com/yoga_sutras.pdf".into(),
            language: "Sanskrit".into(),
            publish_year: 2023,
            publisher: "Yoga Philosophy Publications".into(),
            isbn: "978-93-123456-06-6".into(),
            read_time: "25 days".into(),
            chapters: strings(&["Samadhi Pada", "Sadhana Pada", "Vibhuti Pada", "Kaivalya Pada"]),
            tags: strings(&["Yoga", "Philosophy", "Patanjali", "Sutras", "Practice"]),
            ..Book::new(
                "b006",
                "Yoga Sutras of Patanjali",
                "Maharshi Patanjali",
                "Philosophy",
                420,
            )
        },
    ]
}

pub fn sample_events(now: Timestamp) -> Vec<Event> {
    let at = |offset: Duration| now.plus(offset);
    let hours = Duration::from_hours;
    let days = Duration::from_days;

    vec![
        Event {
            description: "Grand celebration of Lord Rama's birth with bhajans, aarti, and prasad distribution".into(),
            location: "Mohali Community Center".into(),
            organizer: "Ram Bhakt Samaj".into(),
            registration_required: true,
            max_attendees: Some(500),
            current_attendees: 234,
            image_url: "https://example.com/ram_navami_event.jpg".into(),
            contact_info: "contact@rambhaktsamaj.org".into(),
            requirements: strings(&["Registration Required", "Free Entry", "Prasad Available"]),
            ..Event::new(
                "e001",
                "Ram Navami Celebration",
                "Festival",
                at(days(1)),
                at(days(1) + hours(8)),
            )
        },
        Event {
            description: "Learn advanced meditation techniques from experienced teachers".into(),
            location: "Zoom Meeting".into(),
            organizer: "Meditation Academy".into(),
            is_online: true,
            registration_required: true,
            max_attendees: Some(100),
            current_attendees: 67,
            price: "₹500".into(),
            image_url: "https://example.com/meditation_workshop.jpg".into(),
            contact_info: "info@meditationacademy.com".into(),
            requirements: strings(&["Zoom App", "Quiet Environment", "Meditation Mat"]),
            ..Event::new(
                "e002",
                "Online Meditation Workshop",
                "Workshop",
                at(days(3)),
                at(days(3) + hours(2)),
            )
        },
        Event {
            description: "108 times chanting for healing and protection".into(),
            location: "Zoom Meeting".into(),
            organizer: "Divine Chants Group".into(),
            is_online: true,
            current_attendees: 234,
            ..Event::new(
                "e003",
                "Online Mahamrityunjaya Mantra Jaap",
                "Mantra",
                at(hours(1)),
                at(hours(1) + Duration::from_seconds(90 * 60)),
            )
        },
        Event {
            description: "3-day intensive spiritual practice retreat".into(),
            location: "Rishikesh Ashram".into(),
            organizer: "Himalayan Yoga Center".into(),
            registration_required: true,
            max_attendees: Some(50),
            current_attendees: 23,
            price: "₹2500".into(),
            ..Event::new(
                "e004",
                "Yoga and Meditation Retreat",
                "Retreat",
                at(days(7)),
                at(days(10)),
            )
        },
        Event {
            description: "Monthly full moon group meditation and energy healing".into(),
            location: "Online & Chandigarh Center".into(),
            organizer: "Lunar Energy Circle".into(),
            is_online: true,
            registration_required: true,
            max_attendees: Some(200),
            current_attendees: 89,
            ..Event::new(
                "e005",
                "Full Moon Meditation",
                "Meditation",
                at(days(14)),
                at(days(14) + hours(1)),
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaigurudev_core::Validator;

    #[test]
    fn test_sample_sizes() {
        let data = sample_data(Timestamp::from_millis(0));
        assert_eq!(data.videos.len(), 5);
        assert_eq!(data.music.len(), 5);
        assert_eq!(data.books.len(), 6);
        assert_eq!(data.events.len(), 5);
    }

    #[test]
    fn test_every_sample_record_is_valid() {
        let data = sample_data(Timestamp::now());
        assert!(data.videos.iter().all(Validator::is_valid));
        assert!(data.music.iter().all(Validator::is_valid));
        assert!(data.books.iter().all(Validator::is_valid));
        assert!(data.events.iter().all(Validator::is_valid));
    }

    #[test]
    fn test_event_times_follow_now() {
        let now = Timestamp::from_millis(1_000_000);
        let events = sample_events(now);
        assert_eq!(events[0].start_time, now.plus(Duration::from_days(1)));
        assert_eq!(events[0].duration(), Duration::from_hours(8));
        assert_eq!(events[3].duration(), Duration::from_days(3));
        assert!(events.iter().all(|e| e.is_upcoming(now)));
    }

    #[test]
    fn test_sample_catalog_builds() {
        assert!(sample_catalog(Timestamp::now()).is_ok());
    }
}
