use async_trait::async_trait;
use impulse_dns_application::ports::DnsApiRepository;
use impulse_dns_domain::{
    AddressFamily, AddressRecord, DnsKey, DnsZone, DomainError, MxRecord, NewAddressRecord,
    NewCname, NewMailserver, NewNameserver, NewSrv, NewText, NsRecord, PointerRecord, RecordType,
    TextRecord,
};
use sqlx::PgPool;
use std::net::IpAddr;
use tracing::{error, instrument};

use super::dns_row_mapper::{
    map_rows, row_to_address, row_to_key, row_to_mx, row_to_ns, row_to_pointer, row_to_text,
    row_to_zone, AddressRow, KeyRow, MxRow, NsRow, PointerRow, TextRow, ZoneRow, ADDRESS_SELECT,
    KEYS_SELECT, KEY_SELECT, MX_SELECT, NS_SELECT, POINTER_SELECT, TEXT_SELECT, ZONES_SELECT,
    ZONE_SELECT,
};

/// Calls the `api.*` stored procedures with bound parameters.
pub struct PgDnsApiRepository {
    pool: PgPool,
}

impl PgDnsApiRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Logs a failed procedure call and converts it, keeping the backend's own
/// message since the procedures report validation failures that way.
fn backend_error(procedure: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!(procedure, error = %e, "Stored procedure call failed");
        match e {
            sqlx::Error::Database(db) => DomainError::DatabaseError(db.message().to_string()),
            other => DomainError::DatabaseError(other.to_string()),
        }
    }
}

fn ttl_param(ttl: u32) -> Result<i32, DomainError> {
    i32::try_from(ttl).map_err(|_| DomainError::InvalidTtl(ttl))
}

#[async_trait]
impl DnsApiRepository for PgDnsApiRepository {
    #[instrument(skip(self))]
    async fn create_address(&self, record: &NewAddressRecord) -> Result<(), DomainError> {
        sqlx::query("SELECT api.create_dns_address($1::inet, $2, $3, $4, $5)")
            .bind(record.address.to_string())
            .bind(&record.hostname)
            .bind(&record.zone)
            .bind(ttl_param(record.ttl)?)
            .bind(&record.owner)
            .execute(&self.pool)
            .await
            .map_err(backend_error("create_dns_address"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_nameserver(&self, record: &NewNameserver) -> Result<(), DomainError> {
        sqlx::query("SELECT api.create_dns_nameserver($1, $2, $3, $4, $5)")
            .bind(&record.hostname)
            .bind(&record.zone)
            .bind(record.isprimary)
            .bind(ttl_param(record.ttl)?)
            .bind(&record.owner)
            .execute(&self.pool)
            .await
            .map_err(backend_error("create_dns_nameserver"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_mailserver(&self, record: &NewMailserver) -> Result<(), DomainError> {
        sqlx::query("SELECT api.create_dns_mailserver($1, $2, $3, $4, $5)")
            .bind(&record.hostname)
            .bind(&record.zone)
            .bind(record.preference)
            .bind(ttl_param(record.ttl)?)
            .bind(&record.owner)
            .execute(&self.pool)
            .await
            .map_err(backend_error("create_dns_mailserver"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_cname(&self, record: &NewCname) -> Result<(), DomainError> {
        sqlx::query("SELECT api.create_dns_cname($1, $2, $3, $4, $5)")
            .bind(&record.alias)
            .bind(&record.hostname)
            .bind(&record.zone)
            .bind(ttl_param(record.ttl)?)
            .bind(&record.owner)
            .execute(&self.pool)
            .await
            .map_err(backend_error("create_dns_cname"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_srv(&self, record: &NewSrv) -> Result<(), DomainError> {
        sqlx::query("SELECT api.create_dns_srv($1, $2, $3, $4, $5, $6, $7, $8)")
            .bind(&record.alias)
            .bind(&record.hostname)
            .bind(&record.zone)
            .bind(record.priority)
            .bind(record.weight)
            .bind(record.port)
            .bind(ttl_param(record.ttl)?)
            .bind(&record.owner)
            .execute(&self.pool)
            .await
            .map_err(backend_error("create_dns_srv"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn create_text(&self, record: &NewText) -> Result<(), DomainError> {
        sqlx::query("SELECT api.create_dns_text($1, $2, $3, $4, $5, $6)")
            .bind(&record.hostname)
            .bind(&record.zone)
            .bind(&record.text)
            .bind(record.record_type.as_str())
            .bind(ttl_param(record.ttl)?)
            .bind(&record.owner)
            .execute(&self.pool)
            .await
            .map_err(backend_error("create_dns_text"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_address_records(
        &self,
        address: IpAddr,
    ) -> Result<Vec<AddressRecord>, DomainError> {
        let rows = sqlx::query_as::<_, AddressRow>(ADDRESS_SELECT)
            .bind(address.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_a"))?;

        map_rows(rows, row_to_address)
    }

    #[instrument(skip(self))]
    async fn get_pointer_records(
        &self,
        address: IpAddr,
    ) -> Result<Vec<PointerRecord>, DomainError> {
        let rows = sqlx::query_as::<_, PointerRow>(POINTER_SELECT)
            .bind(address.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_pointers"))?;

        map_rows(rows, row_to_pointer)
    }

    #[instrument(skip(self))]
    async fn get_text_records(&self, address: IpAddr) -> Result<Vec<TextRecord>, DomainError> {
        let rows = sqlx::query_as::<_, TextRow>(TEXT_SELECT)
            .bind(address.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_text"))?;

        map_rows(rows, row_to_text)
    }

    #[instrument(skip(self))]
    async fn get_ns_records(&self, address: IpAddr) -> Result<Vec<NsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, NsRow>(NS_SELECT)
            .bind(address.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_ns"))?;

        map_rows(rows, row_to_ns)
    }

    #[instrument(skip(self))]
    async fn get_mx_records(&self, address: IpAddr) -> Result<Vec<MxRecord>, DomainError> {
        let rows = sqlx::query_as::<_, MxRow>(MX_SELECT)
            .bind(address.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_mx"))?;

        map_rows(rows, row_to_mx)
    }

    #[instrument(skip(self))]
    async fn get_record_types(&self) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar::<_, String>("SELECT api.get_record_types()")
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_record_types"))
    }

    #[instrument(skip(self))]
    async fn get_zones(&self, username: Option<&str>) -> Result<Vec<DnsZone>, DomainError> {
        let rows = sqlx::query_as::<_, ZoneRow>(ZONES_SELECT)
            .bind(username)
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_zones"))?;

        Ok(rows.into_iter().map(row_to_zone).collect())
    }

    #[instrument(skip(self))]
    async fn get_zone(&self, zone: &str) -> Result<Vec<DnsZone>, DomainError> {
        let rows = sqlx::query_as::<_, ZoneRow>(ZONE_SELECT)
            .bind(zone)
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_zone"))?;

        Ok(rows.into_iter().map(row_to_zone).collect())
    }

    #[instrument(skip(self))]
    async fn get_keys(&self, username: Option<&str>) -> Result<Vec<DnsKey>, DomainError> {
        let rows = sqlx::query_as::<_, KeyRow>(KEYS_SELECT)
            .bind(username)
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_keys"))?;

        Ok(rows.into_iter().map(row_to_key).collect())
    }

    #[instrument(skip(self))]
    async fn get_key(&self, keyname: &str) -> Result<Vec<DnsKey>, DomainError> {
        let rows = sqlx::query_as::<_, KeyRow>(KEY_SELECT)
            .bind(keyname)
            .fetch_all(&self.pool)
            .await
            .map_err(backend_error("get_dns_key"))?;

        Ok(rows.into_iter().map(row_to_key).collect())
    }

    #[instrument(skip(self))]
    async fn remove_address(&self, address: IpAddr) -> Result<(), DomainError> {
        sqlx::query("SELECT api.remove_dns_address($1::inet)")
            .bind(address.to_string())
            .execute(&self.pool)
            .await
            .map_err(backend_error("remove_dns_address"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_nameserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError> {
        sqlx::query("SELECT api.remove_dns_nameserver($1, $2)")
            .bind(hostname)
            .bind(zone)
            .execute(&self.pool)
            .await
            .map_err(backend_error("remove_dns_nameserver"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_mailserver(&self, hostname: &str, zone: &str) -> Result<(), DomainError> {
        sqlx::query("SELECT api.remove_dns_mailserver($1, $2)")
            .bind(hostname)
            .bind(zone)
            .execute(&self.pool)
            .await
            .map_err(backend_error("remove_dns_mailserver"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_cname(
        &self,
        alias: &str,
        hostname: &str,
        zone: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("SELECT api.remove_dns_cname($1, $2, $3)")
            .bind(alias)
            .bind(hostname)
            .bind(zone)
            .execute(&self.pool)
            .await
            .map_err(backend_error("remove_dns_cname"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_srv(&self, alias: &str, hostname: &str, zone: &str) -> Result<(), DomainError> {
        sqlx::query("SELECT api.remove_dns_srv($1, $2, $3)")
            .bind(alias)
            .bind(hostname)
            .bind(zone)
            .execute(&self.pool)
            .await
            .map_err(backend_error("remove_dns_srv"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
    ) -> Result<(), DomainError> {
        sqlx::query("SELECT api.remove_dns_text($1, $2, $3)")
            .bind(hostname)
            .bind(zone)
            .bind(record_type.as_str())
            .execute(&self.pool)
            .await
            .map_err(backend_error("remove_dns_text"))?;

        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn modify_address(
        &self,
        address: IpAddr,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("SELECT api.modify_dns_address($1::inet, $2, $3)")
            .bind(address.to_string())
            .bind(field)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(backend_error("modify_dns_address"))?;

        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn modify_nameserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("SELECT api.modify_dns_nameserver($1, $2, $3, $4)")
            .bind(hostname)
            .bind(zone)
            .bind(field)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(backend_error("modify_dns_nameserver"))?;

        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn modify_mailserver(
        &self,
        hostname: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("SELECT api.modify_dns_mailserver($1, $2, $3, $4)")
            .bind(hostname)
            .bind(zone)
            .bind(field)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(backend_error("modify_dns_mailserver"))?;

        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn modify_cname(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("SELECT api.modify_dns_cname($1, $2, $3, $4)")
            .bind(alias)
            .bind(zone)
            .bind(field)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(backend_error("modify_dns_cname"))?;

        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn modify_srv(
        &self,
        alias: &str,
        zone: &str,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("SELECT api.modify_dns_srv($1, $2, $3, $4)")
            .bind(alias)
            .bind(zone)
            .bind(field)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(backend_error("modify_dns_srv"))?;

        Ok(())
    }

    #[instrument(skip(self, value))]
    async fn modify_text(
        &self,
        hostname: &str,
        zone: &str,
        record_type: RecordType,
        field: &str,
        value: &str,
    ) -> Result<(), DomainError> {
        sqlx::query("SELECT api.modify_dns_text($1, $2, $3, $4, $5)")
            .bind(hostname)
            .bind(zone)
            .bind(record_type.as_str())
            .bind(field)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(backend_error("modify_dns_text"))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn resolve(
        &self,
        hostname: &str,
        zone: &str,
        family: AddressFamily,
    ) -> Result<Option<IpAddr>, DomainError> {
        let resolved = sqlx::query_scalar::<_, Option<String>>(
            "SELECT host(api.dns_resolve($1, $2, $3))",
        )
        .bind(hostname)
        .bind(zone)
        .bind(family.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(backend_error("dns_resolve"))?;

        resolved
            .map(|raw| {
                raw.parse().map_err(|_| {
                    DomainError::InvalidRow(format!("dns_resolve returned '{}'", raw))
                })
            })
            .transpose()
    }

    #[instrument(skip(self))]
    async fn check_hostname(
        &self,
        hostname: &str,
        zone: &str,
    ) -> Result<Option<bool>, DomainError> {
        sqlx::query_scalar::<_, Option<bool>>("SELECT api.check_dns_hostname($1, $2)")
            .bind(hostname)
            .bind(zone)
            .fetch_one(&self.pool)
            .await
            .map_err(backend_error("check_dns_hostname"))
    }
}
