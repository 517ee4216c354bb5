use engine::{Error, Point};
use serde_json::{json, Value};

fn pixels(coordinates: &[(i32, i32)]) -> Vec<Point> {
    coordinates.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn rasterize_line() {
    let line = json!({ "x1": 0, "y1": 0, "x2": 5, "y2": 2 });

    assert_eq!(
        engine::rasterize(&line, "linha"),
        Ok(pixels(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]))
    );
}

#[test]
fn rasterize_line_with_dda() {
    let line = json!({ "x1": 0, "y1": 0, "x2": 0, "y2": 3, "algoritmo": "dda" });

    assert_eq!(
        engine::rasterize(&line, "line"),
        Ok(pixels(&[(0, 0), (0, 1), (0, 2), (0, 3)]))
    );
}

#[test]
fn rasterize_circle() {
    let circle = json!({ "xc": 0, "yc": 0, "r": 1 });

    assert_eq!(
        engine::rasterize(&circle, "circulo"),
        Ok(pixels(&[(-1, 0), (0, -1), (0, 1), (1, 0)]))
    );
}

#[test]
fn pixels_serialize_as_objects() {
    let circle = json!({ "xc": 0, "yc": 0, "r": 1 });
    let pixels = engine::rasterize(&circle, "circulo").unwrap();

    assert_eq!(
        serde_json::to_value(pixels).unwrap(),
        json!([
            { "x": -1, "y": 0 },
            { "x": 0, "y": -1 },
            { "x": 0, "y": 1 },
            { "x": 1, "y": 0 },
        ])
    );
}

#[test]
fn unknown_kinds_have_no_pixels() {
    let data = json!({ "x1": 0, "y1": 0, "x2": 5, "y2": 2 });
    assert_eq!(engine::rasterize(&data, "poligono"), Ok(vec![]));
}

#[test]
fn missing_fields_are_errors() {
    let data = json!({ "x1": 0, "y1": 0, "x2": 5 });

    assert_eq!(
        engine::rasterize(&data, "linha"),
        Err(Error::MissingField { field: "y2" })
    );
    assert_eq!(
        engine::rasterize(&json!("linha"), "linha"),
        Err(Error::NotAnObject)
    );
}

#[test]
fn clip_nested_line() {
    let request = json!({
        "tipo": "linha",
        "dados": { "x1": -5, "y1": 5, "x2": 15, "y2": 5 },
        "xmin": 0, "ymin": 0, "xmax": 10, "ymax": 10,
        "metodo": "liang-barsky",
    });

    let response = engine::clip_and_rasterize(&request).unwrap();
    let expected: Vec<(i32, i32)> = (0..=10).map(|x| (x, 5)).collect();

    assert_eq!(response.pixels, pixels(&expected));
    assert!(response.visible);
    assert_eq!(response.data, request["dados"]);
}

#[test]
fn clip_response_keys() {
    let request = json!({
        "dados": { "x1": 20, "y1": 20, "x2": 30, "y2": 25 },
        "xmin": 0, "ymin": 0, "xmax": 10, "ymax": 10,
    });

    let response = engine::clip_and_rasterize(&request).unwrap();

    assert_eq!(
        serde_json::to_value(response).unwrap(),
        json!({
            "dados": { "x1": 20, "y1": 20, "x2": 30, "y2": 25 },
            "pixels": [],
            "visible": false,
        })
    );
}

#[test]
fn clip_flat_circle() {
    let request = json!({
        "xc": 0, "yc": 0, "r": 5,
        "xmin": 0, "ymin": 0, "xmax": 10, "ymax": 10,
    });

    let response = engine::clip_and_rasterize(&request).unwrap();

    assert_eq!(
        response.pixels,
        pixels(&[(0, 5), (1, 5), (2, 4), (3, 3), (4, 2), (5, 0), (5, 1)])
    );
    assert!(response.visible);
    assert_eq!(response.data, request);
}

#[test]
fn clip_with_reversed_window_corners() {
    let request = json!({
        "tipo": "linha",
        "dados": { "x1": -5, "y1": 5, "x2": 15, "y2": 5 },
        "xmin": 10, "ymin": 10, "xmax": 0, "ymax": 0,
    });

    let response = engine::clip_and_rasterize(&request).unwrap();
    assert_eq!(response.pixels.len(), 11);
}

#[test]
fn clip_unknown_kind() {
    let request = json!({
        "tipo": "triangulo",
        "dados": { "x1": 1, "y1": 1, "x2": 2, "y2": 2 },
        "xmin": 0, "ymin": 0, "xmax": 10, "ymax": 10,
    });

    let response = engine::clip_and_rasterize(&request).unwrap();

    assert!(response.pixels.is_empty());
    assert!(!response.visible);
    assert_eq!(response.data, request["dados"]);
}

#[test]
fn clip_without_window() {
    let request = json!({ "dados": { "x1": 1, "y1": 1, "x2": 2, "y2": 2 }, "xmin": 0 });

    assert_eq!(
        engine::clip_and_rasterize(&request),
        Err(Error::MissingField { field: "ymin" })
    );
}

#[test]
fn translation_keeps_other_fields() {
    let data = json!({ "x1": 1, "y1": 2, "x2": 3, "y2": 4, "cor": "#ff0000" });
    let params = json!({ "dx": 10, "dy": -1 });

    assert_eq!(
        engine::transform(&data, "linha", "translacao", &params),
        Ok(json!({ "x1": 11, "y1": 1, "x2": 13, "y2": 3, "cor": "#ff0000" }))
    );
}

#[test]
fn translation_round_trip() {
    let data = json!({ "xc": 6, "yc": -1, "r": 4 });

    let there = engine::transform(&data, "circulo", "translacao", &json!({ "dx": 7, "dy": 3 }))
        .unwrap();
    let back = engine::transform(&there, "circulo", "translacao", &json!({ "dx": -7, "dy": -3 }))
        .unwrap();

    assert_eq!(back, data);
}

#[test]
fn rotation_around_the_midpoint() {
    let data = json!({ "x1": 0, "y1": 0, "x2": 10, "y2": 0 });

    assert_eq!(
        engine::transform(&data, "linha", "rotacao", &json!({ "angulo": 90 })),
        Ok(json!({ "x1": 5, "y1": -5, "x2": 5, "y2": 5 }))
    );
}

#[test]
fn reflection_across_the_x_axis() {
    let data = json!({ "x1": 1, "y1": 2, "x2": -3, "y2": 4 });

    assert_eq!(
        engine::transform(&data, "linha", "reflexao", &json!({ "eixo": "x" })),
        Ok(json!({ "x1": 1, "y1": -2, "x2": -3, "y2": -4 }))
    );
}

#[test]
fn unknown_transformations_return_the_input() {
    let data = json!({ "x1": 1, "y1": 2, "x2": 3, "y2": 4 });

    assert_eq!(
        engine::transform(&data, "linha", "cisalhamento", &json!({})),
        Ok(data.clone())
    );
    assert_eq!(
        engine::transform(&data, "poligono", "translacao", &json!({})),
        Ok(data)
    );
}

#[test]
fn unknown_transformation_skips_decoding() {
    let incomplete = json!({ "x1": 1, "y1": 2, "y2": 4 });

    assert_eq!(
        engine::transform(&incomplete, "linha", "cisalhamento", &json!({})),
        Ok(incomplete.clone())
    );
    assert_eq!(
        engine::transform(&incomplete, "linha", "translacao", &json!({ "dx": 1, "dy": 1 })),
        Err(Error::MissingField { field: "x2" })
    );
}

#[test]
fn translation_past_the_coordinate_range() {
    let data = json!({ "xc": 2147483600, "yc": 0, "r": 5 });

    assert_eq!(
        engine::transform(&data, "circulo", "translacao", &json!({ "dx": 100, "dy": 0 })),
        Err(Error::OutOfRange)
    );
}

#[test]
fn circle_at_the_edge_of_the_coordinate_range() {
    let circle = json!({ "xc": 2147483647, "yc": 0, "r": 5 });
    let pixels = engine::rasterize(&circle, "circulo").unwrap();

    assert!(pixels.contains(&Point::new(i32::MAX, 5)));
    assert!(pixels.iter().all(|pixel| pixel.x >= i32::MAX - 5));
}

#[test]
fn transformation_without_params() {
    let data = json!({ "x1": 1, "y1": 2, "x2": 3, "y2": 4 });

    assert_eq!(
        engine::transform(&data, "linha", "escala", &json!({ "sx": 2 })),
        Err(Error::MissingField { field: "sy" })
    );
}

#[test]
fn transform_request() {
    let request = json!({
        "tipo": "circulo",
        "dados": { "xc": 1, "yc": 1, "r": 2 },
        "transf": "escala",
        "params": { "sx": 2, "sy": 3 },
    });

    assert_eq!(
        engine::transform_request(&request),
        Ok(json!({ "xc": 1, "yc": 1, "r": 5 }))
    );
}

#[test]
fn draw_infers_the_kind_from_the_algorithm() {
    let request = json!({ "xc": 0, "yc": 0, "r": 1, "algoritmo": "bresenham_circulo" });
    let response = engine::draw(&request).unwrap();

    assert_eq!(response.kind, "circulo");
    assert_eq!(response.data, request);
    assert_eq!(response.pixels.len(), 4);

    let request = json!({ "x1": 0, "y1": 0, "x2": 2, "y2": 0, "algoritmo": "dda" });
    let response = engine::draw(&request).unwrap();

    assert_eq!(response.kind, "linha");
    assert_eq!(response.pixels, pixels(&[(0, 0), (1, 0), (2, 0)]));
}

#[test]
fn transform_and_draw() {
    let request = json!({
        "tipo": "linha",
        "dados": { "x1": 0, "y1": 0, "x2": 2, "y2": 0 },
        "transf": "translacao",
        "params": { "dx": 1, "dy": 1 },
    });

    let response = engine::transform_and_draw(&request).unwrap();

    assert_eq!(
        serde_json::to_value(response).unwrap(),
        json!({
            "tipo": "linha",
            "dados": { "x1": 1, "y1": 1, "x2": 3, "y2": 1 },
            "pixels": [{ "x": 1, "y": 1 }, { "x": 2, "y": 1 }, { "x": 3, "y": 1 }],
        })
    );

    let request = json!({ "tipo": "linha", "dados": {}, "params": {} });
    assert_eq!(
        engine::transform_and_draw(&request).map(|response| response.pixels),
        Err(Error::MissingField { field: "transf" })
    );
}

#[test]
fn error_messages() {
    let messages: Vec<String> = [
        Error::MissingField { field: "x1" },
        Error::InvalidField { field: "r" },
        Error::InvalidKind {
            kind: "poligono".to_string(),
        },
        Error::NotAnObject,
        Error::OutOfRange,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(
        messages,
        [
            "missing field \"x1\"",
            "field \"r\" does not hold a valid value",
            "unknown kind \"poligono\"",
            "expected an object",
            "the transformed primitive does not fit into the coordinate range",
        ]
    );
}

#[test]
fn responses_are_plain_json() {
    let value: Value = serde_json::to_value(
        engine::draw(&json!({ "x1": 0, "y1": 0, "x2": 0, "y2": 0 })).unwrap(),
    )
    .unwrap();

    assert_eq!(value["pixels"], json!([{ "x": 0, "y": 0 }]));
}
