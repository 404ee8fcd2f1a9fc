//! Static catalog of the 66 books in canonical order.

use crate::domain::BibleBook;

/// Genesis through Malachi occupy the first entries of [`BIBLE_BOOKS`].
pub const OLD_TESTAMENT_LEN: usize = 39;

pub const BIBLE_BOOKS: &[BibleBook] = &[
    // Old Testament
    BibleBook::new("genesis", "GEN", "Genesis", 50),
    BibleBook::new("exodus", "EXO", "Exodus", 40),
    BibleBook::new("leviticus", "LEV", "Leviticus", 27),
    BibleBook::new("numbers", "NUM", "Numbers", 36),
    BibleBook::new("deuteronomy", "DEU", "Deuteronomy", 34),
    BibleBook::new("joshua", "JOS", "Joshua", 24),
    BibleBook::new("judges", "JDG", "Judges", 21),
    BibleBook::new("ruth", "RUT", "Ruth", 4),
    BibleBook::new("1samuel", "1SA", "1 Samuel", 31),
    BibleBook::new("2samuel", "2SA", "2 Samuel", 24),
    BibleBook::new("1kings", "1KI", "1 Kings", 22),
    BibleBook::new("2kings", "2KI", "2 Kings", 25),
    BibleBook::new("1chronicles", "1CH", "1 Chronicles", 29),
    BibleBook::new("2chronicles", "2CH", "2 Chronicles", 36),
    BibleBook::new("ezra", "EZR", "Ezra", 10),
    BibleBook::new("nehemiah", "NEH", "Nehemiah", 13),
    BibleBook::new("esther", "EST", "Esther", 10),
    BibleBook::new("job", "JOB", "Job", 42),
    BibleBook::new("psalms", "PSA", "Psalms", 150),
    BibleBook::new("proverbs", "PRO", "Proverbs", 31),
    BibleBook::new("ecclesiastes", "ECC", "Ecclesiastes", 12),
    BibleBook::new("song", "SNG", "Song of Songs", 8),
    BibleBook::new("isaiah", "ISA", "Isaiah", 66),
    BibleBook::new("jeremiah", "JER", "Jeremiah", 52),
    BibleBook::new("lamentations", "LAM", "Lamentations", 5),
    BibleBook::new("ezekiel", "EZK", "Ezekiel", 48),
    BibleBook::new("daniel", "DAN", "Daniel", 12),
    BibleBook::new("hosea", "HOS", "Hosea", 14),
    BibleBook::new("joel", "JOL", "Joel", 3),
    BibleBook::new("amos", "AMO", "Amos", 9),
    BibleBook::new("obadiah", "OBA", "Obadiah", 1),
    BibleBook::new("jonah", "JON", "Jonah", 4),
    BibleBook::new("micah", "MIC", "Micah", 7),
    BibleBook::new("nahum", "NAM", "Nahum", 3),
    BibleBook::new("habakkuk", "HAB", "Habakkuk", 3),
    BibleBook::new("zephaniah", "ZEP", "Zephaniah", 3),
    BibleBook::new("haggai", "HAG", "Haggai", 2),
    BibleBook::new("zechariah", "ZEC", "Zechariah", 14),
    BibleBook::new("malachi", "MAL", "Malachi", 4),
    // New Testament
    BibleBook::new("matthew", "MAT", "Matthew", 28),
    BibleBook::new("mark", "MRK", "Mark", 16),
    BibleBook::new("luke", "LUK", "Luke", 24),
    BibleBook::new("john", "JHN", "John", 21),
    BibleBook::new("acts", "ACT", "Acts", 28),
    BibleBook::new("romans", "ROM", "Romans", 16),
    BibleBook::new("1corinthians", "1CO", "1 Corinthians", 16),
    BibleBook::new("2corinthians", "2CO", "2 Corinthians", 13),
    BibleBook::new("galatians", "GAL", "Galatians", 6),
    BibleBook::new("ephesians", "EPH", "Ephesians", 6),
    BibleBook::new("philippians", "PHP", "Philippians", 4),
    BibleBook::new("colossians", "COL", "Colossians", 4),
    BibleBook::new("1thessalonians", "1TH", "1 Thessalonians", 5),
    BibleBook::new("2thessalonians", "2TH", "2 Thessalonians", 3),
    BibleBook::new("1timothy", "1TI", "1 Timothy", 6),
    BibleBook::new("2timothy", "2TI", "2 Timothy", 4),
    BibleBook::new("titus", "TIT", "Titus", 3),
    BibleBook::new("philemon", "PHM", "Philemon", 1),
    BibleBook::new("hebrews", "HEB", "Hebrews", 13),
    BibleBook::new("james", "JAS", "James", 5),
    BibleBook::new("1peter", "1PE", "1 Peter", 5),
    BibleBook::new("2peter", "2PE", "2 Peter", 3),
    BibleBook::new("1john", "1JN", "1 John", 5),
    BibleBook::new("2john", "2JN", "2 John", 1),
    BibleBook::new("3john", "3JN", "3 John", 1),
    BibleBook::new("jude", "JUD", "Jude", 1),
    BibleBook::new("revelation", "REV", "Revelation", 22),
];

pub fn find_book(book_id: &str) -> Option<&'static BibleBook> {
    BIBLE_BOOKS
        .iter()
        .find(|book| book.book_id.eq_ignore_ascii_case(book_id))
}

pub fn find_book_by_name(book_name: &str) -> Option<&'static BibleBook> {
    BIBLE_BOOKS
        .iter()
        .find(|book| book.book_name.eq_ignore_ascii_case(book_name))
}

pub fn book_index(book_id: &str) -> Option<usize> {
    BIBLE_BOOKS
        .iter()
        .position(|book| book.book_id.eq_ignore_ascii_case(book_id))
}

pub fn find_book_by_api_id(api_id: &str) -> Option<&'static BibleBook> {
    BIBLE_BOOKS
        .iter()
        .find(|book| book.api_id.eq_ignore_ascii_case(api_id))
}

/// Catalog entry for a verse or favorite. `book_id` may be a catalog id or
/// an API code such as `SNG`; the display name is tried last.
pub fn resolve_book(book_id: &str, book_name: &str) -> Option<&'static BibleBook> {
    find_book(book_id)
        .or_else(|| find_book_by_api_id(book_id))
        .or_else(|| find_book_by_name(book_name))
}

/// Next chapter within the same book, or `None` on the last chapter.
pub fn next_chapter(book: &BibleBook, chapter: u32) -> Option<u32> {
    (chapter < book.chapters).then_some(chapter + 1)
}

/// Previous chapter within the same book, or `None` on the first chapter.
pub fn prev_chapter(book: &BibleBook, chapter: u32) -> Option<u32> {
    (chapter > 1).then(|| chapter - 1)
}
