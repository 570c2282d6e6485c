//! Simplified built-in map geometry.
//!
//! Coarse polylines in geodetic (lon, lat) degrees covering the analysis
//! extent (North America, lon -120..-70, lat 20..50). Resolution is
//! deliberately low: the geometry provides geographic orientation under the
//! data layer, not a navigational-quality basemap.

/// Closed land ring for the North American landmass within the extent.
///
/// Ocean-facing portions follow the coast; the remaining sides run along
/// the extent edges (land continues beyond the view there).
pub(crate) const LAND: &[(f64, f64)] = &[
    // Extent north edge (interior Canada)
    (-120.0, 50.0),
    (-70.0, 50.0),
    // Extent east edge down to the Gulf of Maine
    (-70.0, 43.5),
    // Atlantic coast
    (-70.6, 42.7),
    (-70.3, 41.6),
    (-71.4, 41.5),
    (-72.9, 41.2),
    (-74.0, 40.6),
    (-74.1, 39.7),
    (-75.0, 38.9),
    (-75.6, 37.5),
    (-76.0, 36.9),
    (-75.8, 35.6),
    (-76.5, 34.7),
    (-77.9, 33.9),
    (-79.0, 33.2),
    (-80.0, 32.5),
    (-81.0, 31.5),
    (-81.4, 30.7),
    (-81.0, 29.2),
    (-80.6, 28.4),
    (-80.1, 26.8),
    (-80.1, 25.8),
    // Florida tip and Gulf coast
    (-80.4, 25.2),
    (-81.1, 25.2),
    (-81.7, 25.9),
    (-82.0, 26.9),
    (-82.8, 27.9),
    (-82.7, 29.0),
    (-83.7, 29.9),
    (-84.4, 30.0),
    (-85.3, 29.7),
    (-86.5, 30.4),
    (-87.3, 30.3),
    (-88.0, 30.2),
    (-89.1, 30.2),
    (-89.2, 29.1),
    (-90.1, 29.2),
    (-91.3, 29.5),
    (-92.3, 29.5),
    (-93.8, 29.7),
    (-94.7, 29.3),
    (-96.0, 28.6),
    (-97.2, 27.6),
    (-97.2, 26.1),
    (-97.1, 25.9),
    // Mexican Gulf coast down to the extent south edge
    (-97.8, 24.5),
    (-97.8, 23.0),
    (-97.5, 21.5),
    (-97.2, 20.6),
    (-96.9, 20.0),
    // Extent south edge (central Mexico)
    (-105.4, 20.0),
    // Pacific coast of Mexico and the Gulf of California
    (-105.5, 21.5),
    (-106.4, 23.2),
    (-108.0, 25.0),
    (-109.4, 26.7),
    (-110.6, 27.9),
    (-111.9, 29.0),
    (-113.1, 30.5),
    (-114.6, 31.7),
    // Baja California east coast southwards
    (-114.8, 31.0),
    (-113.5, 28.9),
    (-112.3, 27.3),
    (-111.3, 26.0),
    (-110.3, 24.2),
    (-109.9, 22.9),
    // Baja west coast northwards
    (-110.6, 23.5),
    (-112.1, 24.5),
    (-113.5, 26.7),
    (-114.9, 27.9),
    (-115.7, 29.5),
    (-116.3, 31.0),
    (-117.1, 32.5),
    // US Pacific coast up to the extent west edge
    (-117.3, 33.0),
    (-118.3, 33.7),
    (-118.8, 34.0),
    (-119.7, 34.4),
    (-120.0, 34.45),
    // Extent west edge (coast lies west of -120 from here north)
];

/// Index into [`LAND`] where the ocean-facing coastline starts (after the
/// synthetic north/east extent edges).
pub(crate) const COAST_START: usize = 2;

/// Index into [`LAND`] just past the last coastline vertex.
pub(crate) const COAST_END: usize = LAND.len();

/// Great Lakes outlines (closed rings).
pub(crate) const LAKES: &[&[(f64, f64)]] = &[
    // Superior
    &[
        (-92.1, 46.8),
        (-90.4, 46.6),
        (-88.0, 46.9),
        (-86.5, 46.5),
        (-84.8, 46.5),
        (-85.0, 47.3),
        (-86.5, 47.7),
        (-88.4, 48.2),
        (-89.6, 48.0),
        (-91.0, 48.1),
        (-92.1, 46.8),
    ],
    // Michigan
    &[
        (-87.6, 41.6),
        (-86.5, 41.8),
        (-86.2, 43.0),
        (-85.5, 44.8),
        (-84.9, 45.8),
        (-85.7, 45.9),
        (-86.9, 45.2),
        (-87.8, 44.3),
        (-87.8, 43.0),
        (-87.6, 41.6),
    ],
    // Huron
    &[
        (-84.7, 45.9),
        (-83.3, 45.2),
        (-82.5, 44.0),
        (-82.4, 43.0),
        (-83.5, 44.0),
        (-84.0, 45.0),
        (-84.7, 45.9),
    ],
    // Erie
    &[
        (-83.5, 41.7),
        (-81.7, 41.5),
        (-80.1, 42.2),
        (-78.9, 42.9),
        (-80.1, 42.6),
        (-81.8, 42.1),
        (-83.1, 42.1),
        (-83.5, 41.7),
    ],
    // Ontario
    &[
        (-79.8, 43.3),
        (-77.0, 43.3),
        (-76.2, 43.5),
        (-76.8, 43.9),
        (-78.7, 43.9),
        (-79.5, 43.6),
        (-79.8, 43.3),
    ],
];

/// National borders (US-Canada, US-Mexico), interrupted at the Great
/// Lakes the way coastline-limited border data is.
pub(crate) const BORDERS: &[&[(f64, f64)]] = &[
    // US-Canada: 49th parallel and Lake of the Woods to Lake Superior
    &[
        (-120.0, 49.0),
        (-95.15, 49.0),
        (-95.15, 49.38),
        (-94.8, 49.3),
        (-92.5, 48.4),
        (-90.8, 48.1),
        (-89.3, 48.0),
    ],
    // Sault Ste. Marie between Superior and Huron
    &[(-84.8, 46.5), (-84.1, 46.2)],
    // St. Clair / Detroit River between Huron and Erie
    &[(-82.4, 43.0), (-82.5, 42.6), (-83.1, 42.1)],
    // Niagara between Erie and Ontario
    &[(-78.9, 42.9), (-79.0, 43.1), (-79.2, 43.3)],
    // St. Lawrence and the New England border
    &[
        (-76.8, 43.9),
        (-76.3, 44.2),
        (-74.7, 45.0),
        (-71.5, 45.0),
        (-70.8, 45.4),
        (-70.3, 45.9),
        (-70.0, 46.3),
    ],
    // US-Mexico
    &[
        (-117.1, 32.5),
        (-114.7, 32.7),
        (-111.1, 31.33),
        (-108.2, 31.33),
        (-108.2, 31.78),
        (-106.5, 31.78),
        (-104.9, 30.6),
        (-103.3, 29.0),
        (-102.3, 29.9),
        (-100.9, 29.4),
        (-99.5, 27.5),
        (-97.5, 25.9),
        (-97.1, 25.9),
    ],
];

/// State and province boundaries (coarse, interior segments only).
pub(crate) const STATES: &[&[(f64, f64)]] = &[
    // Washington/Oregon
    &[(-120.0, 45.8), (-118.0, 45.95), (-116.9, 46.0)],
    // Oregon/Idaho
    &[(-116.9, 46.0), (-117.0, 44.0), (-117.0, 42.0)],
    // Latitude 42: California/Oregon through Utah/Idaho
    &[(-120.0, 42.0), (-111.05, 42.0)],
    // California/Nevada and the Colorado River
    &[
        (-120.0, 42.0),
        (-120.0, 39.0),
        (-114.6, 35.0),
        (-114.1, 34.3),
        (-114.5, 33.3),
        (-114.7, 32.7),
    ],
    // Idaho/Montana
    &[
        (-116.0, 49.0),
        (-116.0, 48.0),
        (-114.6, 46.6),
        (-113.0, 45.6),
        (-111.5, 44.5),
        (-111.05, 44.5),
    ],
    // Idaho/Wyoming and Utah/Wyoming
    &[(-111.05, 45.0), (-111.05, 41.0)],
    // Montana/Wyoming
    &[(-111.05, 45.0), (-104.05, 45.0)],
    // Longitude 104: Montana through Wyoming east borders
    &[(-104.05, 49.0), (-104.05, 41.0)],
    // Nevada/Utah
    &[(-114.05, 42.0), (-114.05, 37.0)],
    // Longitude 109: Utah/Colorado and Arizona/New Mexico
    &[(-109.05, 41.0), (-109.05, 31.33)],
    // Latitude 41: Wyoming south border
    &[(-111.05, 41.0), (-102.05, 41.0)],
    // Latitude 37: Utah/Arizona through Kansas/Oklahoma
    &[(-114.05, 37.0), (-94.6, 37.0)],
    // Colorado/Nebraska-Kansas east border
    &[(-102.05, 41.0), (-102.05, 37.0)],
    // North Dakota/South Dakota
    &[(-104.05, 45.94), (-96.6, 45.94)],
    // South Dakota/Nebraska
    &[(-104.05, 43.0), (-98.0, 43.0), (-96.4, 42.5)],
    // Nebraska/Kansas
    &[(-102.05, 40.0), (-95.3, 40.0)],
    // Oklahoma panhandle and the Red River
    &[(-103.0, 36.5), (-100.0, 36.5)],
    &[
        (-100.0, 36.5),
        (-100.0, 34.56),
        (-98.1, 34.1),
        (-96.9, 33.9),
        (-95.8, 33.9),
        (-94.05, 33.55),
    ],
    // New Mexico/Texas
    &[(-103.04, 37.0), (-103.04, 32.0), (-106.6, 32.0)],
    // Red River of the North (Minnesota/Dakotas)
    &[(-96.8, 49.0), (-96.6, 47.5), (-96.6, 45.94), (-96.45, 45.3)],
    // Minnesota/Iowa
    &[(-96.45, 43.5), (-91.2, 43.5)],
    // Iowa/Missouri
    &[(-95.8, 40.58), (-91.7, 40.6)],
    // Upper Mississippi and St. Croix river borders
    &[
        (-92.8, 45.8),
        (-92.8, 44.8),
        (-91.3, 43.8),
        (-91.2, 43.5),
        (-90.2, 42.5),
        (-90.2, 41.8),
        (-91.1, 41.2),
        (-90.9, 40.0),
        (-90.2, 38.8),
        (-89.5, 37.5),
        (-89.2, 36.6),
        (-90.1, 35.1),
        (-91.0, 33.8),
        (-91.2, 32.5),
        (-91.0, 31.0),
        (-90.5, 30.7),
    ],
    // Wisconsin/Illinois
    &[(-90.6, 42.5), (-87.8, 42.5)],
    // Illinois/Indiana
    &[(-87.5, 41.7), (-87.53, 39.1), (-88.0, 37.9)],
    // Indiana/Ohio
    &[(-84.8, 41.7), (-84.8, 39.1)],
    // Ohio/Pennsylvania
    &[(-80.52, 42.3), (-80.52, 39.72)],
    // Mason-Dixon line
    &[(-80.52, 39.72), (-75.8, 39.72)],
    // Pennsylvania/New York and the Delaware River
    &[(-79.76, 42.0), (-75.3, 42.0), (-75.1, 41.8), (-74.8, 41.3), (-75.1, 40.6)],
    // Ohio River (Kentucky north border)
    &[
        (-89.2, 37.0),
        (-88.0, 37.8),
        (-86.5, 38.0),
        (-85.7, 38.3),
        (-84.8, 39.1),
        (-83.0, 38.7),
        (-82.6, 38.4),
        (-81.7, 38.9),
        (-80.9, 40.1),
        (-80.5, 40.6),
    ],
    // Kentucky/Tennessee
    &[(-89.5, 36.5), (-83.7, 36.6), (-81.7, 36.6)],
    // Tennessee south border
    &[(-90.3, 35.0), (-84.3, 35.0)],
    // North Carolina/South Carolina
    &[(-83.1, 35.0), (-81.0, 35.15), (-79.0, 34.3), (-78.5, 33.9)],
    // Virginia/North Carolina
    &[(-83.7, 36.6), (-75.9, 36.55)],
    // Missouri/Arkansas
    &[(-94.6, 36.5), (-89.7, 36.5)],
    // Missouri/Kansas
    &[(-94.6, 40.0), (-94.6, 36.5)],
    // Arkansas west and south borders
    &[(-94.6, 36.5), (-94.45, 35.4), (-94.04, 33.55), (-94.04, 33.0)],
    &[(-94.04, 33.0), (-91.2, 33.0)],
    // Louisiana/Texas (Sabine River)
    &[(-94.04, 33.0), (-93.8, 31.9), (-93.7, 31.0), (-93.7, 30.0), (-93.9, 29.7)],
    // Georgia/Alabama
    &[(-85.0, 35.0), (-85.1, 32.9), (-84.9, 32.3), (-85.1, 31.0)],
    // Alabama/Mississippi
    &[(-88.2, 35.0), (-88.4, 31.9), (-88.4, 30.3)],
    // Florida north border
    &[(-87.6, 31.0), (-85.0, 31.0), (-84.9, 30.7), (-82.2, 30.57), (-81.5, 30.7)],
    // New York/Vermont-Massachusetts-Connecticut
    &[(-73.3, 45.0), (-73.4, 42.7), (-73.5, 42.05), (-73.7, 41.1)],
    // Massachusetts south border
    &[(-73.5, 42.05), (-71.1, 42.1)],
    // Vermont/New Hampshire (Connecticut River)
    &[(-71.5, 45.0), (-72.1, 44.0), (-72.4, 43.0), (-72.5, 42.7)],
    // New Hampshire/Maine
    &[(-71.1, 45.3), (-70.8, 43.1)],
    // Alberta/Saskatchewan and Saskatchewan/Manitoba
    &[(-110.0, 49.0), (-110.0, 50.0)],
    &[(-101.4, 49.0), (-101.4, 50.0)],
    // Manitoba/Ontario
    &[(-95.15, 49.38), (-95.15, 50.0)],
    // Sonora/Chihuahua
    &[(-108.6, 31.33), (-108.0, 29.0), (-107.4, 27.0)],
    // Coahuila/Chihuahua
    &[(-104.9, 30.6), (-104.5, 29.0), (-103.9, 27.8)],
];
