//! estudio の保存先 Outbound ポート（日付ごとにまとめて保存する）

use crate::domain::StudyRecord;
use common::error::Error;

pub trait StudySink: Send + Sync {
    fn save(&self, record: &StudyRecord) -> Result<(), Error>;
}
