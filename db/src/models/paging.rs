#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
///enum used to indicate if query data must be sorted in ascending or descending order
pub enum SortingDir {
    Asc,
    Desc,
    None,
}

#[derive(Serialize, Deserialize, Clone)]
///struct used to indicate paging information and search query information
pub struct Paging {
    pub page: u64,
    pub limit: u64,
    pub sort: String,
    pub dir: SortingDir,
    pub total: u64,
}

#[derive(Serialize)]
///return wrapper struct for returning large lists
pub struct Payload<T> {
    pub data: Vec<T>,
    pub paging: Paging,
}

impl<T> Payload<T> {
    pub fn new(data: Vec<T>, paging: Paging) -> Payload<T> {
        Payload { data, paging }
    }
}

#[derive(Serialize, Deserialize, Clone, Default)]
///struct used to indicate paging information and search query information
pub struct PagingParameters {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
    pub dir: Option<SortingDir>,
    pub query: Option<String>,
}

impl PagingParameters {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(0)
    }

    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(100)
    }
}

impl Paging {
    pub fn new(received: &PagingParameters) -> Self {
        Paging {
            page: received.page(),
            limit: received.limit(),
            sort: received.sort.clone().unwrap_or_else(|| "".to_string()),
            dir: received.dir.unwrap_or(SortingDir::None),
            total: 0,
        }
    }

    pub fn clone_with_new_total(received: &Paging, new_total: u64) -> Self {
        Paging {
            page: received.page,
            limit: received.limit,
            sort: received.sort.clone(),
            dir: received.dir,
            total: new_total,
        }
    }
}
