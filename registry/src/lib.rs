use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::memory::activity::InMemoryActivityLogRepository;
use adapter::memory::assignment::InMemoryAssignmentRepository;
use adapter::memory::building::{InMemoryBuildingRepository, InMemoryFloorRepository};
use adapter::memory::employee::InMemoryEmployeeRepository;
use adapter::memory::health::InMemoryHealthCheckRepository;
use adapter::memory::hosting::InMemoryHostingRepository;
use adapter::memory::maintenance::InMemoryMaintenanceRepository;
use adapter::memory::reservation::InMemoryReservationRepository;
use adapter::memory::room::InMemoryRoomRepository;
use adapter::memory::settings::InMemorySystemSettingsRepository;
use adapter::memory::InMemoryStore;
use adapter::repository::activity::ActivityLogRepositoryImpl;
use adapter::repository::assignment::AssignmentRepositoryImpl;
use adapter::repository::building::{BuildingRepositoryImpl, FloorRepositoryImpl};
use adapter::repository::employee::EmployeeRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::hosting::HostingRepositoryImpl;
use adapter::repository::maintenance::MaintenanceRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use adapter::repository::settings::SystemSettingsRepositoryImpl;
use kernel::repository::activity::ActivityLogRepository;
use kernel::repository::assignment::AssignmentRepository;
use kernel::repository::building::{BuildingRepository, FloorRepository};
use kernel::repository::employee::EmployeeRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::hosting::HostingRepository;
use kernel::repository::maintenance::MaintenanceRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::room::RoomRepository;
use kernel::repository::settings::SystemSettingsRepository;

/// Wires concrete repositories behind their trait objects. Handlers only
/// see the traits, so the Postgres and in-memory backends are
/// interchangeable at construction time.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    building_repository: Arc<dyn BuildingRepository>,
    floor_repository: Arc<dyn FloorRepository>,
    room_repository: Arc<dyn RoomRepository>,
    employee_repository: Arc<dyn EmployeeRepository>,
    assignment_repository: Arc<dyn AssignmentRepository>,
    hosting_repository: Arc<dyn HostingRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
    maintenance_repository: Arc<dyn MaintenanceRepository>,
    activity_log_repository: Arc<dyn ActivityLogRepository>,
    system_settings_repository: Arc<dyn SystemSettingsRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            health_check_repository: Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
            building_repository: Arc::new(BuildingRepositoryImpl::new(pool.clone())),
            floor_repository: Arc::new(FloorRepositoryImpl::new(pool.clone())),
            room_repository: Arc::new(RoomRepositoryImpl::new(pool.clone())),
            employee_repository: Arc::new(EmployeeRepositoryImpl::new(pool.clone())),
            assignment_repository: Arc::new(AssignmentRepositoryImpl::new(pool.clone())),
            hosting_repository: Arc::new(HostingRepositoryImpl::new(pool.clone())),
            reservation_repository: Arc::new(ReservationRepositoryImpl::new(pool.clone())),
            maintenance_repository: Arc::new(MaintenanceRepositoryImpl::new(pool.clone())),
            activity_log_repository: Arc::new(ActivityLogRepositoryImpl::new(pool.clone())),
            system_settings_repository: Arc::new(SystemSettingsRepositoryImpl::new(pool.clone())),
        }
    }

    /// Backs every repository with one shared in-memory store. Used by the
    /// test suite and handy for ephemeral deployments.
    pub fn in_memory() -> Self {
        let store = InMemoryStore::new();
        Self {
            health_check_repository: Arc::new(InMemoryHealthCheckRepository::new(store.clone())),
            building_repository: Arc::new(InMemoryBuildingRepository::new(store.clone())),
            floor_repository: Arc::new(InMemoryFloorRepository::new(store.clone())),
            room_repository: Arc::new(InMemoryRoomRepository::new(store.clone())),
            employee_repository: Arc::new(InMemoryEmployeeRepository::new(store.clone())),
            assignment_repository: Arc::new(InMemoryAssignmentRepository::new(store.clone())),
            hosting_repository: Arc::new(InMemoryHostingRepository::new(store.clone())),
            reservation_repository: Arc::new(InMemoryReservationRepository::new(store.clone())),
            maintenance_repository: Arc::new(InMemoryMaintenanceRepository::new(store.clone())),
            activity_log_repository: Arc::new(InMemoryActivityLogRepository::new(store.clone())),
            system_settings_repository: Arc::new(InMemorySystemSettingsRepository::new(store)),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn building_repository(&self) -> Arc<dyn BuildingRepository> {
        self.building_repository.clone()
    }

    pub fn floor_repository(&self) -> Arc<dyn FloorRepository> {
        self.floor_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn employee_repository(&self) -> Arc<dyn EmployeeRepository> {
        self.employee_repository.clone()
    }

    pub fn assignment_repository(&self) -> Arc<dyn AssignmentRepository> {
        self.assignment_repository.clone()
    }

    pub fn hosting_repository(&self) -> Arc<dyn HostingRepository> {
        self.hosting_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }

    pub fn maintenance_repository(&self) -> Arc<dyn MaintenanceRepository> {
        self.maintenance_repository.clone()
    }

    pub fn activity_log_repository(&self) -> Arc<dyn ActivityLogRepository> {
        self.activity_log_repository.clone()
    }

    pub fn system_settings_repository(&self) -> Arc<dyn SystemSettingsRepository> {
        self.system_settings_repository.clone()
    }
}
