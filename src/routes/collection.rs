use http::Method;

/// A single route entry produced by a registrar.
///
/// Carries only what the host router needs to mount the route: the name it
/// is referenced by, the path template, the HTTP methods it answers to and
/// the optional storage specification name the controller should use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub path: String,
    pub methods: Vec<Method>,
    pub spec_name: Option<String>,
}

/// Ordered collection of routes accumulated during a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteCollection {
    routes: Vec<Route>,
}

impl RouteCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// First route with the given name, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Route> {
        self.routes.iter()
    }

    /// Print all routes to stdout.
    ///
    /// Useful for verifying what a configuration file registers.
    pub fn dump(&self) {
        println!("[routes] count={}", self.routes.len());
        for route in &self.routes {
            let methods = route
                .methods
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join(",");
            match &route.spec_name {
                Some(spec) => println!(
                    "[route] {methods} {} -> {} (spec: {spec})",
                    route.path, route.name
                ),
                None => println!("[route] {methods} {} -> {}", route.path, route.name),
            }
        }
    }
}

impl IntoIterator for RouteCollection {
    type Item = Route;
    type IntoIter = std::vec::IntoIter<Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl<'a> IntoIterator for &'a RouteCollection {
    type Item = &'a Route;
    type IntoIter = std::slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
