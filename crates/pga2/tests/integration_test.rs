use pga2::motor::{reflect, rotor, translator};
use pga2::ops::*;
use pga2::primitive::Primitive;
use pga2::render::{render, Drawable, Viewport};
use pga2::scalar::Real;
use pga2::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn intersect_then_draw() {
    let eps = f64::default_epsilon();
    let viewport = Viewport::new(-10., 10., -10., 10.).unwrap();

    let horizontal = make_line(0., 1., -2.);
    let vertical = make_line(1., 0., -3.);
    let p = horizontal.meet(vertical);

    match p.classify(eps) {
        Primitive::Point(point) => assert_eq!(point.coordinates(eps).unwrap(), [3., 2.]),
        other => panic!("expected a point, got {:?}", other),
    }
    assert_eq!(render(p, &viewport, eps), Ok(Drawable::Marker { x: 3., y: 2. }));

    // Parallel lines meet at an ideal point, which is drawn as an arrow along the lines
    let ideal = horizontal.meet(make_line(0., 1., 5.));
    assert!(ideal.is_ideal_point(eps));
    match render(ideal, &viewport, eps).unwrap() {
        Drawable::DirectionArrow { x, y, dx, dy } => {
            assert_eq!([x, y], [0., 0.]);
            assert!(close(dy, 0.));
            assert!(close(dx.abs(), 5.));
        }
        other => panic!("expected an arrow, got {:?}", other),
    }
}

#[test]
fn move_a_triangle() {
    let eps = 1e-9;
    let triangle = [make_point(0., 0.), make_point(2., 0.), make_point(0., 1.)];
    let area = |[a, b, c]: [Multivector<f64>; 3]| signed_area(a, b, c, eps).unwrap();
    assert!(close(area(triangle), 1.));

    // Rigid motions keep the area and the winding
    let motor = rotor(1.2, make_point(3., -1.), eps)
        .unwrap()
        .then(translator(-4., 7.));
    let moved = triangle.map(|p| motor.transform(p));
    assert!(close(area(moved), 1.));

    // Reflections flip the winding
    let mirror = make_line(1., 2., -3.);
    let mirrored = triangle.map(|p| reflect(p, mirror, eps).unwrap());
    assert!(close(area(mirrored), -1.));

    // Side lengths survive both
    let d = |t: [Multivector<f64>; 3]| distance_point_point(t[1], t[2], eps).unwrap();
    assert!(close(d(moved), d(triangle)));
    assert!(close(d(mirrored), d(triangle)));
}

#[test]
fn errors_are_recoverable() {
    let eps = 1e-9;
    let viewport = Viewport::new(0., 1., 0., 1.).unwrap();
    let lines = [
        make_line(1., 0., -0.5),
        make_line(1., 0., -5.),
        make_line(0., 1., -0.25),
    ];
    let drawn: Vec<_> = lines
        .iter()
        .filter_map(|&l| match render(l, &viewport, eps) {
            Ok(d) => Some(d),
            Err(Error::LineOutsideViewport) => None,
            Err(e) => panic!("unexpected error {}", e),
        })
        .collect();
    assert_eq!(drawn.len(), 2);

    let err = make_point(0., 0.).normalize(eps).and_then(|p| {
        distance_point_point(p, make_ideal_point(1., 0.), eps)
    });
    assert_eq!(err, Err(Error::UndefinedDistance));
    assert_eq!(err.unwrap_err().to_string(), "distance is undefined for ideal elements");
}
