use crate::domain::ItemType;

pub const MAIN_MENU: &str = "\
LIBRANET LIBRARY MANAGEMENT SYSTEM
1. Display all the items
2. Borrow an item
3. Return an item
4. Search by title
5. Search by author
6. Search by type
7. Show available items
8. Show borrowed items
9. Show total fines
10. Use specialized functions
0. Exit";

pub const TYPE_MENU: &str = "\
Select item type:
1. Books
2. Audiobooks
3. E-Magazines";

pub const SPECIALIZED_MENU: &str = "\
Specialized functions:
1. Get page count of a book
2. Play an audiobook
3. Archive an e-magazine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayAll,
    Borrow,
    Return,
    SearchByTitle,
    SearchByAuthor,
    SearchByType,
    ShowAvailable,
    ShowBorrowed,
    ShowFines,
    Specialized,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        let choice = match number {
            1 => MenuChoice::DisplayAll,
            2 => MenuChoice::Borrow,
            3 => MenuChoice::Return,
            4 => MenuChoice::SearchByTitle,
            5 => MenuChoice::SearchByAuthor,
            6 => MenuChoice::SearchByType,
            7 => MenuChoice::ShowAvailable,
            8 => MenuChoice::ShowBorrowed,
            9 => MenuChoice::ShowFines,
            10 => MenuChoice::Specialized,
            0 => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecializedChoice {
    PageCount,
    Play,
    Archive,
}

impl SpecializedChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(SpecializedChoice::PageCount),
            2 => Some(SpecializedChoice::Play),
            3 => Some(SpecializedChoice::Archive),
            _ => None,
        }
    }
}

pub fn item_type_from_number(number: i64) -> Option<ItemType> {
    match number {
        1 => Some(ItemType::Book),
        2 => Some(ItemType::Audiobook),
        3 => Some(ItemType::EMagazine),
        _ => None,
    }
}

/// Parse a menu answer; surrounding whitespace is ignored
pub fn parse_number(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 10\n"), Some(10));
        assert_eq!(parse_number("-3"), Some(-3));
        assert_eq!(parse_number("ten"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_menu_choice_mapping() {
        assert_eq!(MenuChoice::from_number(0), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(10), Some(MenuChoice::Specialized));
        assert_eq!(MenuChoice::from_number(11), None);
        assert_eq!(MenuChoice::from_number(-1), None);
    }

    #[test]
    fn test_sub_menus() {
        assert_eq!(item_type_from_number(3), Some(ItemType::EMagazine));
        assert_eq!(item_type_from_number(4), None);
        assert_eq!(SpecializedChoice::from_number(2), Some(SpecializedChoice::Play));
        assert_eq!(SpecializedChoice::from_number(0), None);
    }
}
