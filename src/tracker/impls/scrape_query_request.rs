use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::query::Query;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;

impl ScrapeQueryRequest {
    pub fn from_query(query: &Query) -> Result<ScrapeQueryRequest, TrackerError> {
        if query.info_hashes.is_empty() {
            return Err(TrackerError::MissingInfoHash);
        }
        let info_hashes = query.info_hashes.iter()
            .map(|data| InfoHash::try_from(data.as_slice()))
            .collect::<Result<Vec<InfoHash>, TrackerError>>()?;
        Ok(ScrapeQueryRequest { info_hashes })
    }
}
