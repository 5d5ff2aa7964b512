use crate::domain::{AudiobookPlayed, IssueArchived};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 通知サービスポート
///
/// 利用者向けのお知らせ配信を抽象化する。カタログ本体は入出力を行わないため、
/// 再生・アーカイブのお知らせはこのポート経由で呼び出し側が配信する。
pub trait NotificationService {
    /// オーディオブックの再生開始を通知する
    fn announce_playback(&self, event: &AudiobookPlayed) -> Result<()>;

    /// 電子雑誌の号のアーカイブを通知する
    ///
    /// 初回のアーカイブ時のみ呼ばれる。
    fn announce_archive(&self, event: &IssueArchived) -> Result<()>;
}
