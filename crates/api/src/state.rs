use impulse_dns_application::ports::DnsApiRepository;
use impulse_dns_application::use_cases::{
    CreateDnsRecordUseCase, GetDnsRecordsUseCase, GetKeysUseCase, GetRecordTypesUseCase,
    GetZonesUseCase, ModifyDnsRecordUseCase, RemoveDnsRecordUseCase, ResolveHostnameUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub records: RecordUseCases,
    pub zones: Arc<GetZonesUseCase>,
    pub keys: Arc<GetKeysUseCase>,
    pub resolve: Arc<ResolveHostnameUseCase>,
    pub record_types: Arc<GetRecordTypesUseCase>,
}

#[derive(Clone)]
pub struct RecordUseCases {
    pub get: Arc<GetDnsRecordsUseCase>,
    pub create: Arc<CreateDnsRecordUseCase>,
    pub remove: Arc<RemoveDnsRecordUseCase>,
    pub modify: Arc<ModifyDnsRecordUseCase>,
}

impl AppState {
    pub fn new(repo: Arc<dyn DnsApiRepository>) -> Self {
        Self {
            records: RecordUseCases {
                get: Arc::new(GetDnsRecordsUseCase::new(repo.clone())),
                create: Arc::new(CreateDnsRecordUseCase::new(repo.clone())),
                remove: Arc::new(RemoveDnsRecordUseCase::new(repo.clone())),
                modify: Arc::new(ModifyDnsRecordUseCase::new(repo.clone())),
            },
            zones: Arc::new(GetZonesUseCase::new(repo.clone())),
            keys: Arc::new(GetKeysUseCase::new(repo.clone())),
            resolve: Arc::new(ResolveHostnameUseCase::new(repo.clone())),
            record_types: Arc::new(GetRecordTypesUseCase::new(repo)),
        }
    }
}
