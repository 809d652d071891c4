mod address;
mod audit;
mod mailserver;
mod nameserver;
mod pointer;
mod record_type;
mod requests;
mod text;

pub use address::AddressRecord;
pub use audit::AuditInfo;
pub use mailserver::MxRecord;
pub use nameserver::NsRecord;
pub use pointer::PointerRecord;
pub use record_type::RecordType;
pub use requests::{NewAddressRecord, NewCname, NewMailserver, NewNameserver, NewSrv, NewText};
pub use text::TextRecord;
