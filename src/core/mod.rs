pub mod choseong;
pub mod completion;
pub mod eng2kor;
pub mod hangul_fsm;
pub mod jamo;
pub mod kor2eng;
pub mod layout;
pub mod suffix;
pub mod unicode;
