//! 配線: 標準アダプタで App を組み立てる
//!
//! 設定（SophieConfig・プロバイダ）は起動時に 1 度だけ読み、以後は読み取り専用で注入する。

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{
    Clock, EnvResolver, FileJsonLog, FileSystem, Log, StdClock, StdEnvResolver,
    StdFileSystem,
};
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::llm::{create_provider, load_profiles_config, resolve_provider, LlmProvider, ProfilesConfig};

use crate::adapter::{load_sophie_config, CsvExpenseSink, ProviderCompletion, StudyPlanSink};
use crate::domain::SophieConfig;
use crate::usecase::extraction::DEFAULT_TEMPERATURE;
use crate::usecase::{
    ActionAssembler, DateResolver, ExtractionRequester, IntentClassifier, ReportUseCase,
};

pub struct App {
    pub env_resolver: Arc<dyn EnvResolver>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Log>,
    pub config: SophieConfig,
    pub profiles: Option<ProfilesConfig>,
    pub data_dir: PathBuf,
    pub expense_store: Arc<CsvExpenseSink>,
    pub study_sink: Arc<StudyPlanSink>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_sophie() -> Result<App, Error> {
    wire_with(
        Arc::new(StdFileSystem),
        Arc::new(StdEnvResolver),
        Arc::new(StdClock),
    )
}

/// 指定のアダプタで App を組み立てる（ログは home/logs/sophie.jsonl）
pub fn wire_with(
    fs: Arc<dyn FileSystem>,
    env_resolver: Arc<dyn EnvResolver>,
    clock: Arc<dyn Clock>,
) -> Result<App, Error> {
    let dirs = env_resolver.resolve_dirs()?;
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file()));
    let config_file = dirs.config_file();
    let config = load_sophie_config(fs.as_ref(), env_resolver.as_ref(), &config_file)?;
    let profiles = load_profiles_config(fs.as_ref(), &config_file)?;
    let data_dir = config.data_dir.clone().unwrap_or(dirs.data_dir);
    let expense_store = Arc::new(CsvExpenseSink::new(Arc::clone(&fs), &data_dir));
    let study_sink = Arc::new(StudyPlanSink::new(Arc::clone(&fs), &data_dir));
    Ok(App {
        env_resolver,
        clock,
        logger,
        config,
        profiles,
        data_dir,
        expense_store,
        study_sink,
    })
}

impl App {
    pub fn report_use_case(&self) -> ReportUseCase {
        ReportUseCase::new(self.expense_store.clone())
    }

    /// プロファイル・モデルを解決して ActionAssembler を組み立てる
    pub fn process_use_case(
        &self,
        profile: Option<&ProviderName>,
        model: Option<&ModelName>,
    ) -> Result<ActionAssembler, Error> {
        let resolved = resolve_provider(profile, self.profiles.as_ref())?;
        let provider: Arc<dyn LlmProvider> =
            Arc::new(create_provider(&resolved, model, self.env_resolver.as_ref())?);
        let completion = Arc::new(ProviderCompletion::new(provider, Arc::clone(&self.logger)));
        let requester = ExtractionRequester::new(
            completion,
            Arc::clone(&self.logger),
            resolved.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        );
        Ok(ActionAssembler::new(
            DateResolver::new(Arc::clone(&self.clock), self.config.timezone),
            IntentClassifier::new(self.config.keywords.clone()),
            requester,
            self.expense_store.clone(),
            self.study_sink.clone(),
            Arc::clone(&self.logger),
        ))
    }
}
