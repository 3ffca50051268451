use metrics_exporter_prometheus::PrometheusHandle;
use recircle_core::scoring::impact::{ImpactReport, ReportLog, StorageError};
use recircle_core::scoring::trust::{Seller, SellerStore, StoreError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryReportLog {
    reports: Arc<Mutex<Vec<ImpactReport>>>,
}

impl ReportLog for InMemoryReportLog {
    fn append(&self, report: ImpactReport) -> Result<(), StorageError> {
        let mut guard = self.reports.lock().expect("report log mutex poisoned");
        guard.push(report);
        Ok(())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ImpactReport>, StorageError> {
        let guard = self.reports.lock().expect("report log mutex poisoned");
        let start = guard.len().saturating_sub(limit);
        Ok(guard[start..].to_vec())
    }

    fn snapshot(&self) -> Result<Vec<ImpactReport>, StorageError> {
        let guard = self.reports.lock().expect("report log mutex poisoned");
        Ok(guard.clone())
    }

    fn len(&self) -> Result<usize, StorageError> {
        let guard = self.reports.lock().expect("report log mutex poisoned");
        Ok(guard.len())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.reports.lock().expect("report log mutex poisoned");
        guard.clear();
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySellerStore {
    sellers: Arc<Mutex<HashMap<String, Seller>>>,
}

impl SellerStore for InMemorySellerStore {
    fn fetch(&self, seller_id: &str) -> Result<Option<Seller>, StoreError> {
        let guard = self.sellers.lock().expect("seller store mutex poisoned");
        Ok(guard.get(seller_id).cloned())
    }

    fn upsert(&self, seller: Seller) -> Result<(), StoreError> {
        let mut guard = self.sellers.lock().expect("seller store mutex poisoned");
        guard.insert(seller.id.clone(), seller);
        Ok(())
    }
}
