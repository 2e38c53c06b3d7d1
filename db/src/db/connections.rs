use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::PgConnection;
use std::cell::{RefCell, RefMut};
use std::rc::Rc;

pub enum ConnectionType {
    Pg(RefCell<PgConnection>),
    R2D2(RefCell<PooledConnection<ConnectionManager<PgConnection>>>),
}

/// Cheaply cloneable handle to a single database connection. Diesel needs
/// `&mut PgConnection` per call, so the connection sits behind a `RefCell`
/// and `get()` hands out a short-lived guard. The handle never crosses
/// threads (request handling and tests are single-threaded).
#[derive(Clone)]
pub struct Connection {
    inner: Rc<ConnectionType>,
}

impl From<ConnectionType> for Connection {
    fn from(connection_type: ConnectionType) -> Self {
        Connection {
            inner: Rc::new(connection_type),
        }
    }
}

impl From<PgConnection> for Connection {
    fn from(connection: PgConnection) -> Self {
        ConnectionType::Pg(RefCell::new(connection)).into()
    }
}

impl From<PooledConnection<ConnectionManager<PgConnection>>> for Connection {
    fn from(connection: PooledConnection<ConnectionManager<PgConnection>>) -> Self {
        ConnectionType::R2D2(RefCell::new(connection)).into()
    }
}

impl Connection {
    pub fn get(&self) -> RefMut<'_, PgConnection> {
        match *self.inner {
            ConnectionType::Pg(ref cell) => cell.borrow_mut(),
            ConnectionType::R2D2(ref cell) => RefMut::map(cell.borrow_mut(), |conn| &mut **conn),
        }
    }
}
