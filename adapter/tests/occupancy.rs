use adapter::memory::assignment::InMemoryAssignmentRepository;
use adapter::memory::building::{InMemoryBuildingRepository, InMemoryFloorRepository};
use adapter::memory::employee::InMemoryEmployeeRepository;
use adapter::memory::hosting::InMemoryHostingRepository;
use adapter::memory::reservation::InMemoryReservationRepository;
use adapter::memory::room::InMemoryRoomRepository;
use adapter::memory::InMemoryStore;
use chrono::Utc;
use kernel::model::assignment::event::{CheckoutEmployee, CreateAssignment, ReassignEmployee};
use kernel::model::building::event::{CreateBuilding, CreateFloor};
use kernel::model::employee::event::CreateEmployee;
use kernel::model::hosting::event::{CreateHosting, UpdateHosting};
use kernel::model::hosting::{Guest, HostingStatus};
use kernel::model::id::{EmployeeId, RoomId};
use kernel::model::reservation::event::CreateReservation;
use kernel::model::room::event::{CreateRoom, UpdateRoom};
use kernel::model::room::{Room, RoomStatus};
use kernel::repository::assignment::AssignmentRepository;
use kernel::repository::building::{BuildingRepository, FloorRepository};
use kernel::repository::employee::EmployeeRepository;
use kernel::repository::hosting::HostingRepository;
use kernel::repository::reservation::ReservationRepository;
use kernel::repository::room::RoomRepository;
use shared::error::AppError;

struct Fixture {
    buildings: InMemoryBuildingRepository,
    floors: InMemoryFloorRepository,
    rooms: InMemoryRoomRepository,
    employees: InMemoryEmployeeRepository,
    assignments: InMemoryAssignmentRepository,
    hostings: InMemoryHostingRepository,
    reservations: InMemoryReservationRepository,
    employee_seq: std::sync::atomic::AtomicU32,
}

impl Fixture {
    fn new() -> Self {
        let store = InMemoryStore::new();
        Self {
            buildings: InMemoryBuildingRepository::new(store.clone()),
            floors: InMemoryFloorRepository::new(store.clone()),
            rooms: InMemoryRoomRepository::new(store.clone()),
            employees: InMemoryEmployeeRepository::new(store.clone()),
            assignments: InMemoryAssignmentRepository::new(store.clone()),
            hostings: InMemoryHostingRepository::new(store.clone()),
            reservations: InMemoryReservationRepository::new(store),
            employee_seq: std::sync::atomic::AtomicU32::new(0),
        }
    }

    async fn seed_room(&self, capacity: i32) -> RoomId {
        let building = self
            .buildings
            .create(CreateBuilding {
                name: "Staff Residence".into(),
                address: "1 Compound Road".into(),
            })
            .await
            .unwrap();
        let floor = self
            .floors
            .create(CreateFloor {
                building_id: building.id,
                floor_number: 1,
            })
            .await
            .unwrap();
        self.rooms
            .create(CreateRoom {
                floor_id: floor.id,
                room_number: "101".into(),
                capacity,
            })
            .await
            .unwrap()
            .id
    }

    async fn seed_employee(&self) -> EmployeeId {
        let n = self
            .employee_seq
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.employees
            .create(CreateEmployee {
                staff_number: format!("EMP-{n:04}"),
                first_name: "Sara".into(),
                last_name: "Haddad".into(),
                national_id: format!("NID-{n:08}"),
                job_title: "Nurse".into(),
                department: "Medical".into(),
                phone: None,
                contract_end_date: Utc::now(),
            })
            .await
            .unwrap()
            .id
    }

    async fn room(&self, room_id: RoomId) -> Room {
        self.rooms.find_by_id(room_id).await.unwrap().unwrap()
    }

    fn assign_event(&self, employee_id: EmployeeId, room_id: RoomId) -> CreateAssignment {
        CreateAssignment {
            employee_id,
            room_id,
            check_in_date: Utc::now(),
            expected_check_out_date: None,
        }
    }
}

fn guest(first_name: &str) -> Guest {
    Guest {
        first_name: first_name.into(),
        last_name: "Visitor".into(),
        id_card_number: None,
    }
}

fn reservation_event(room_id: RoomId) -> CreateReservation {
    CreateReservation {
        room_id,
        first_name: "Omar".into(),
        last_name: "Nasser".into(),
        guest_id_card_number: "ID-1".into(),
        guest_phone: "0500000000".into(),
        job_title: "Engineer".into(),
        department: "Facilities".into(),
        guests: vec![],
        check_in_date: Utc::now(),
        check_out_date: None,
        notes: None,
    }
}

#[tokio::test]
async fn assign_checkout_round_trip_on_single_room() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    let assignment = fx
        .assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap();
    assert!(assignment.is_active());

    let room = fx.room(room_id).await;
    assert_eq!(room.current_occupancy, 1);
    assert_eq!(room.status, RoomStatus::Occupied);

    let checked_out = fx
        .assignments
        .checkout(CheckoutEmployee {
            assignment_id: assignment.id,
            check_out_date: None,
        })
        .await
        .unwrap();
    assert!(checked_out.check_out_date.is_some());

    let room = fx.room(room_id).await;
    assert_eq!(room.current_occupancy, 0);
    assert_eq!(room.status, RoomStatus::Available);
}

#[tokio::test]
async fn partial_occupancy_keeps_room_available() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(2).await;

    let first = fx.seed_employee().await;
    fx.assignments
        .assign(fx.assign_event(first, room_id))
        .await
        .unwrap();
    let room = fx.room(room_id).await;
    assert_eq!(room.current_occupancy, 1);
    assert_eq!(room.status, RoomStatus::Available);

    let second = fx.seed_employee().await;
    fx.assignments
        .assign(fx.assign_event(second, room_id))
        .await
        .unwrap();
    let room = fx.room(room_id).await;
    assert_eq!(room.current_occupancy, 2);
    assert_eq!(room.status, RoomStatus::Occupied);
}

#[tokio::test]
async fn assign_to_full_room_is_rejected() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;

    let housed = fx.seed_employee().await;
    fx.assignments
        .assign(fx.assign_event(housed, room_id))
        .await
        .unwrap();

    let late = fx.seed_employee().await;
    let err = fx
        .assignments
        .assign(fx.assign_event(late, room_id))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, AppError::UnprocessableEntity(m) if m == "Room is already at full capacity")
    );

    // The failed attempt must not leak an occupancy bump.
    let room = fx.room(room_id).await;
    assert_eq!(room.current_occupancy, 1);
}

#[tokio::test]
async fn housed_employee_cannot_be_assigned_again() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(2).await;
    let employee_id = fx.seed_employee().await;

    fx.assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap();
    let err = fx
        .assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap_err();
    assert!(
        matches!(&err, AppError::UnprocessableEntity(m) if m == "Employee is already assigned to a room")
    );
    assert_eq!(fx.room(room_id).await.current_occupancy, 1);
}

#[tokio::test]
async fn assign_rejects_unknown_employee_and_room() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    let err = fx
        .assignments
        .assign(fx.assign_event(EmployeeId::new(), room_id))
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::EntityNotFound(m) if m == "Employee not found"));

    let err = fx
        .assignments
        .assign(fx.assign_event(employee_id, RoomId::new()))
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::EntityNotFound(m) if m == "Room not found"));
}

#[tokio::test]
async fn double_checkout_fails_not_found() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    let assignment = fx
        .assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap();
    fx.assignments
        .checkout(CheckoutEmployee {
            assignment_id: assignment.id,
            check_out_date: None,
        })
        .await
        .unwrap();

    let err = fx
        .assignments
        .checkout(CheckoutEmployee {
            assignment_id: assignment.id,
            check_out_date: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::EntityNotFound(m) if m == "Active assignment not found"));

    // Occupancy stays at zero, not negative.
    assert_eq!(fx.room(room_id).await.current_occupancy, 0);
}

#[tokio::test]
async fn reassign_moves_occupancy_between_rooms() {
    let fx = Fixture::new();
    let old_room = fx.seed_room(1).await;
    let new_room = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    let assignment = fx
        .assignments
        .assign(fx.assign_event(employee_id, old_room))
        .await
        .unwrap();
    let outcome = fx
        .assignments
        .reassign(ReassignEmployee {
            assignment_id: assignment.id,
            new_room_id: new_room,
        })
        .await
        .unwrap();
    assert_eq!(outcome.old_assignment.room_id, old_room);
    assert_eq!(outcome.new_assignment.room_id, new_room);
    assert!(outcome.new_assignment.is_active());

    let vacated = fx.room(old_room).await;
    assert_eq!(vacated.current_occupancy, 0);
    assert_eq!(vacated.status, RoomStatus::Available);

    let filled = fx.room(new_room).await;
    assert_eq!(filled.current_occupancy, 1);
    assert_eq!(filled.status, RoomStatus::Occupied);
}

#[tokio::test]
async fn reassign_to_full_room_is_rejected() {
    let fx = Fixture::new();
    let old_room = fx.seed_room(1).await;
    let full_room = fx.seed_room(1).await;

    let occupant = fx.seed_employee().await;
    fx.assignments
        .assign(fx.assign_event(occupant, full_room))
        .await
        .unwrap();

    let mover = fx.seed_employee().await;
    let assignment = fx
        .assignments
        .assign(fx.assign_event(mover, old_room))
        .await
        .unwrap();
    let err = fx
        .assignments
        .reassign(ReassignEmployee {
            assignment_id: assignment.id,
            new_room_id: full_room,
        })
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::UnprocessableEntity(m) if m == "New room is at full capacity"));

    // Nothing moved.
    assert_eq!(fx.room(old_room).await.current_occupancy, 1);
    assert_eq!(fx.room(full_room).await.current_occupancy, 1);
}

#[tokio::test]
async fn reassign_after_checkout_fails_not_found() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;
    let other_room = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    let assignment = fx
        .assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap();
    fx.assignments
        .checkout(CheckoutEmployee {
            assignment_id: assignment.id,
            check_out_date: None,
        })
        .await
        .unwrap();

    let err = fx
        .assignments
        .reassign(ReassignEmployee {
            assignment_id: assignment.id,
            new_room_id: other_room,
        })
        .await
        .unwrap_err();
    assert!(matches!(&err, AppError::EntityNotFound(m) if m == "Active assignment not found"));
}

#[tokio::test]
async fn vacated_maintenance_room_stays_in_maintenance() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    let assignment = fx
        .assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap();
    fx.rooms
        .update(UpdateRoom {
            room_id,
            room_number: None,
            capacity: None,
            under_maintenance: Some(true),
        })
        .await
        .unwrap();

    fx.assignments
        .checkout(CheckoutEmployee {
            assignment_id: assignment.id,
            check_out_date: None,
        })
        .await
        .unwrap();

    let room = fx.room(room_id).await;
    assert_eq!(room.current_occupancy, 0);
    assert_eq!(room.status, RoomStatus::Maintenance);
}

#[tokio::test]
async fn reservation_flips_status_and_deletion_reverts_it() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;

    let reservation = fx
        .reservations
        .create(reservation_event(room_id))
        .await
        .unwrap();
    assert_eq!(fx.room(room_id).await.status, RoomStatus::Reserved);

    fx.reservations.delete(reservation.id).await.unwrap();
    assert_eq!(fx.room(room_id).await.status, RoomStatus::Available);
}

#[tokio::test]
async fn reservation_on_occupied_room_keeps_it_occupied() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    fx.assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap();
    let reservation = fx
        .reservations
        .create(reservation_event(room_id))
        .await
        .unwrap();
    assert_eq!(fx.room(room_id).await.status, RoomStatus::Occupied);

    // Deleting the reservation must not free the still-occupied room.
    fx.reservations.delete(reservation.id).await.unwrap();
    assert_eq!(fx.room(room_id).await.status, RoomStatus::Occupied);
}

#[tokio::test]
async fn hosted_guests_exceed_capacity_and_completion_restores_it() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    fx.assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap();
    let hosting = fx
        .hostings
        .create(CreateHosting {
            employee_id,
            guest_first_name: "Lina".into(),
            guest_last_name: "Visitor".into(),
            guests: vec![guest("Lina"), guest("Karim")],
            start_date: Utc::now(),
            end_date: Utc::now(),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(hosting.room_id, Some(room_id));
    assert_eq!(hosting.applied_guest_count, 2);

    // No capacity check on the guest path: capacity 1, occupancy 3.
    let room = fx.room(room_id).await;
    assert_eq!(room.current_occupancy, 3);
    assert_eq!(room.status, RoomStatus::Occupied);

    let completed = fx
        .hostings
        .update(UpdateHosting {
            hosting_id: hosting.id,
            guest_first_name: None,
            guest_last_name: None,
            start_date: None,
            end_date: None,
            notes: None,
            status: Some(HostingStatus::Completed),
        })
        .await
        .unwrap();
    assert_eq!(completed.status, HostingStatus::Completed);
    assert_eq!(completed.applied_guest_count, 0);
    assert_eq!(fx.room(room_id).await.current_occupancy, 1);

    // A repeated completion adjusts nothing.
    fx.hostings
        .update(UpdateHosting {
            hosting_id: hosting.id,
            guest_first_name: None,
            guest_last_name: None,
            start_date: None,
            end_date: None,
            notes: None,
            status: Some(HostingStatus::Completed),
        })
        .await
        .unwrap();
    assert_eq!(fx.room(room_id).await.current_occupancy, 1);
}

#[tokio::test]
async fn hosting_without_active_assignment_touches_no_room() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(1).await;
    let employee_id = fx.seed_employee().await;

    let hosting = fx
        .hostings
        .create(CreateHosting {
            employee_id,
            guest_first_name: "Lina".into(),
            guest_last_name: "Visitor".into(),
            guests: vec![guest("Lina")],
            start_date: Utc::now(),
            end_date: Utc::now(),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(hosting.room_id, None);
    assert_eq!(hosting.applied_guest_count, 0);
    assert_eq!(fx.room(room_id).await.current_occupancy, 0);
}

#[tokio::test]
async fn cancelled_hosting_keeps_guest_occupancy() {
    let fx = Fixture::new();
    let room_id = fx.seed_room(2).await;
    let employee_id = fx.seed_employee().await;

    fx.assignments
        .assign(fx.assign_event(employee_id, room_id))
        .await
        .unwrap();
    let hosting = fx
        .hostings
        .create(CreateHosting {
            employee_id,
            guest_first_name: "Lina".into(),
            guest_last_name: "Visitor".into(),
            guests: vec![guest("Lina")],
            start_date: Utc::now(),
            end_date: Utc::now(),
            notes: None,
        })
        .await
        .unwrap();
    assert_eq!(fx.room(room_id).await.current_occupancy, 2);

    // Only the Completed transition gives the count back.
    fx.hostings
        .update(UpdateHosting {
            hosting_id: hosting.id,
            guest_first_name: None,
            guest_last_name: None,
            start_date: None,
            end_date: None,
            notes: None,
            status: Some(HostingStatus::Cancelled),
        })
        .await
        .unwrap();
    assert_eq!(fx.room(room_id).await.current_occupancy, 2);
}
